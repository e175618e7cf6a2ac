//! Gateway implementations over chain RPC

pub mod rpc_gateway;

// Re-export for convenience
pub use rpc_gateway::RpcTokenGateway;
