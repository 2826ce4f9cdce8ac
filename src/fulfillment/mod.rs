/// License fulfillment domain
///
/// Pure business logic: package records, the license policy, and the
/// services that resolve packages against the policy and aggregate them
/// into fulfillment records.
pub mod domain;
pub mod policies;
pub mod services;
