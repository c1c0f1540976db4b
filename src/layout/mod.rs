mod flow;

pub use flow::{layout, FlowGraph};
