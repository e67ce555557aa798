/// Stateless path builders.
pub mod primitives;
