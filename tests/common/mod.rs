//! Common test utilities for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stacks_contracts_mcp::{
    stacks::TransactionSubmitter,
    types::{ContractCall, TransactionResult, TransactionStatus},
    Config, Result, StacksContractsServer,
};

/// Build a dry-run server from the default configuration.
pub fn create_test_server() -> StacksContractsServer {
    let config = Config { log_level: "warn".to_string(), ..Config::default() };
    StacksContractsServer::new(config).expect("server should build from default config")
}

/// Submitter that records calls and pretends they were broadcast.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSubmitter {
    pub calls: Mutex<Vec<ContractCall>>,
}

#[async_trait]
impl TransactionSubmitter for RecordingSubmitter {
    async fn submit(&self, call: ContractCall) -> Result<TransactionResult> {
        self.calls.lock().unwrap().push(call.clone());
        Ok(TransactionResult {
            status: TransactionStatus::Submitted,
            tx_id: Some("0xabc123".to_string()),
            explorer_url: None,
            call,
        })
    }
}

/// Build a server that records submitted calls.
#[allow(dead_code)]
pub fn create_recording_server() -> (StacksContractsServer, Arc<RecordingSubmitter>) {
    let submitter = Arc::new(RecordingSubmitter::default());
    let server = StacksContractsServer::with_submitter(Config::default(), submitter.clone())
        .expect("server should build from default config");
    (server, submitter)
}
