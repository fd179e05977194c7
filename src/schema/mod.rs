//! Schema artifacts derived from the model graph.
//!
//! Both generators borrow the graph immutably and run independently: the
//! tree materializer renders containment as nested markup, the metadata
//! generator flattens every class into a typed parameter descriptor.

pub mod meta;
pub mod tree;
