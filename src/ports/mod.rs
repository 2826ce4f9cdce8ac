/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the interfaces the fulfillment core uses to
/// reach its collaborators: the package inventory, the SPDX evaluator, the
/// license-text table, and the console/output surfaces.
pub mod outbound;
