//! Error macros for algokit

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::AlgoError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a node id outside the graph
#[macro_export]
macro_rules! bail_out_of_range {
    ($node:expr, $node_count:expr) => {
        return Err($crate::error::AlgoError::out_of_range($node, $node_count))
    };
}
