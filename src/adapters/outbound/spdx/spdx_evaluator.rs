use crate::ports::outbound::LicenseEvaluator;
use crate::shared::Result;
use spdx::{Expression, LicenseItem, Licensee, ParseMode};

/// SpdxEvaluator adapter implementing SPDX expression satisfaction
///
/// The candidate (an agreed license) is turned into a set of licensees and
/// the declared expression is evaluated against them, so `MIT` satisfies
/// `(MIT OR Apache-2.0)` but not `(MIT AND Apache-2.0)`.
///
/// Declarations are parsed leniently, so lower-case operators and
/// imprecise license names are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpdxEvaluator;

impl SpdxEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Licensees granted by an agreed license
    ///
    /// A compound candidate such as `MIT OR ISC` grants each of its terms.
    /// Licensees are built from the parsed requirements rather than
    /// re-parsed text, since a licensee never carries the `-or-later` or
    /// `+` marker: `GPL-2.0-or-later` grants the bare GNU license, which
    /// still satisfies a `GPL-2.0-or-later` declaration.
    fn licensees(candidate: &str) -> Result<Vec<Licensee>> {
        let expression = Expression::parse_mode(candidate, ParseMode::LAX).map_err(|e| {
            anyhow::anyhow!("Invalid agreed license \"{}\": {}", candidate, e)
        })?;

        Ok(expression
            .requirements()
            .map(|requirement| {
                let license = match &requirement.req.license {
                    LicenseItem::Spdx { id, .. } => LicenseItem::Spdx {
                        id: *id,
                        or_later: false,
                    },
                    other => other.clone(),
                };
                Licensee::new(license, requirement.req.exception)
            })
            .collect())
    }
}

impl LicenseEvaluator for SpdxEvaluator {
    fn satisfies(&self, candidate: &str, declared: &str) -> Result<bool> {
        let licensees = Self::licensees(candidate)?;
        let expression = Expression::parse_mode(declared, ParseMode::LAX)
            .map_err(|e| anyhow::anyhow!("Invalid SPDX expression \"{}\": {}", declared, e))?;

        Ok(expression.evaluate(|requirement| {
            licensees
                .iter()
                .any(|licensee| licensee.satisfies(requirement))
        }))
    }
}
