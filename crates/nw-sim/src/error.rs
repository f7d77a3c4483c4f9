use nw_agent::AgentError;
use nw_core::NwError;
use nw_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] NwError),

    #[error("colour palette is empty")]
    EmptyPalette,

    #[error("{agents} agents cannot each claim a distinct node among {nodes}")]
    TooManyAgents { agents: usize, nodes: usize },

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("agent spawn failed: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
