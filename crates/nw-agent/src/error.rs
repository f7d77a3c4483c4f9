use nw_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("every one of the {nodes} nodes is already reserved")]
    NoFreeNode { nodes: usize },

    #[error("invalid spawn node: {0}")]
    Graph(#[from] GraphError),
}

pub type AgentResult<T> = Result<T, AgentError>;
