/// Object property dump command.
pub mod dump;
/// Single property export command.
pub mod get;
/// Property declaration listing command.
pub mod props;
/// Property apply command.
pub mod set;
#[cfg(test)]
pub(crate) mod test_support;
pub(crate) mod util;
