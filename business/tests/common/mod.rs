//! Analyzers with scripted behaviour for session and runner tests.

#![allow(dead_code)]

use std::any::TypeId;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use qrstudio_business::{AnalysisFailure, AnalysisResult, Analyzer};
use qrstudio_states::TaskId;
use tokio::sync::Notify;

pub fn task(generation: u64) -> TaskId {
    TaskId::new(TypeId::of::<()>(), generation)
}

pub fn official_site() -> AnalysisResult {
    AnalysisResult {
        label: "Official Site".to_owned(),
        primary_color: "#112233".to_owned(),
        secondary_color: "#FFFFFF".to_owned(),
        description: "The company homepage.".to_owned(),
    }
}

/// What a [`ScriptedAnalyzer`] does when called.
#[derive(Debug, Clone)]
pub enum Script {
    Succeed(AnalysisResult),
    Fail(AnalysisFailure),
    Panic,
}

/// Counts calls and optionally blocks until released.
pub struct ScriptedAnalyzer {
    script: Script,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl ScriptedAnalyzer {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            gate: None,
        })
    }

    /// Every call waits on `gate` before answering.
    pub fn gated(script: Script, gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            gate: Some(gate),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Analyzer for ScriptedAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<AnalysisResult, AnalysisFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.script {
            Script::Succeed(result) => Ok(result.clone()),
            Script::Fail(failure) => Err(failure.clone()),
            Script::Panic => panic!("analyzer blew up"),
        }
    }
}
