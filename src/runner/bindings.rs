//! Executable interpretation of the step vocabulary
//!
//! A scenario drives one [`ScenarioContext`] through
//! `AwaitingEndpoint -> AwaitingRequest -> AwaitingAssertion -> Done`.

use super::http::{HttpRequest, HttpResponse, HttpTransport};
use super::steps::StepKind;
use crate::config::RunConfig;
use crate::error::{BddError, Result};
use crate::models::{HttpMethod, Step};
use crate::payload::{PayloadSynthesizer, persist_payload};
use indexmap::IndexMap;
use rand::RngCore;
use rand::rngs::StdRng;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionState {
    AwaitingEndpoint,
    AwaitingRequest,
    AwaitingAssertion,
    Done,
}

impl fmt::Display for ExecutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionState::AwaitingEndpoint => write!(f, "awaiting endpoint"),
            ExecutionState::AwaitingRequest => write!(f, "awaiting request"),
            ExecutionState::AwaitingAssertion => write!(f, "awaiting assertion"),
            ExecutionState::Done => write!(f, "done"),
        }
    }
}

/// Mutable state of one executing scenario.
#[derive(Debug, Clone)]
pub struct ScenarioContext {
    pub state: ExecutionState,
    pub url: Option<String>,
    pub query_params: IndexMap<String, String>,
    pub body_requested: bool,
    pub body: Option<serde_json::Value>,
    pub response: Option<HttpResponse>,
}

impl Default for ScenarioContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self {
            state: ExecutionState::AwaitingEndpoint,
            url: None,
            query_params: IndexMap::new(),
            body_requested: false,
            body: None,
            response: None,
        }
    }

    /// Set an explicit body; POST/PUT then skip payload synthesis.
    pub fn set_body(&mut self, body: serde_json::Value) {
        self.body = Some(body);
    }
}

/// Binds step phrases to HTTP calls against the configured target.
pub struct StepBindings<'a, T: HttpTransport, R: RngCore = StdRng> {
    config: &'a RunConfig,
    transport: T,
    synthesizer: PayloadSynthesizer<R>,
    payload_dir: Option<PathBuf>,
}

impl<'a, T: HttpTransport> StepBindings<'a, T, StdRng> {
    pub fn new(config: &'a RunConfig, transport: T) -> Self {
        Self::with_synthesizer(config, transport, PayloadSynthesizer::from_os_rng())
    }
}

impl<'a, T: HttpTransport, R: RngCore> StepBindings<'a, T, R> {
    pub fn with_synthesizer(
        config: &'a RunConfig,
        transport: T,
        synthesizer: PayloadSynthesizer<R>,
    ) -> Self {
        Self {
            config,
            transport,
            synthesizer,
            payload_dir: None,
        }
    }

    /// Persist synthesized payloads as `<method>_payload.json` under `dir`
    pub fn with_payload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.payload_dir = Some(dir.into());
        self
    }

    pub fn config(&self) -> &RunConfig {
        self.config
    }

    /// Parse and execute one step against `ctx`.
    pub fn execute_step(&mut self, ctx: &mut ScenarioContext, step: &Step) -> Result<()> {
        let kind = StepKind::parse(&step.text)?;
        tracing::debug!(keyword = %step.keyword, step = %step.text, state = %ctx.state, "Executing step");
        self.execute(ctx, kind)
    }

    /// Execute an already-typed step against `ctx`.
    pub fn execute(&mut self, ctx: &mut ScenarioContext, kind: StepKind) -> Result<()> {
        match (ctx.state, kind) {
            (ExecutionState::AwaitingEndpoint, StepKind::Endpoint(path)) => {
                ctx.url = Some(format!("{}{}", self.config.base_url, path));
                ctx.query_params.clear();
                ctx.state = ExecutionState::AwaitingRequest;
                Ok(())
            }
            (ExecutionState::AwaitingRequest, StepKind::QueryParam { key, value }) => {
                ctx.query_params.insert(key, value);
                Ok(())
            }
            (ExecutionState::AwaitingRequest, StepKind::BodyMarker) => {
                ctx.body_requested = true;
                Ok(())
            }
            (ExecutionState::AwaitingRequest, StepKind::SendRequest(method)) => {
                let response = self.send(ctx, method)?;
                ctx.response = Some(response);
                ctx.state = ExecutionState::AwaitingAssertion;
                Ok(())
            }
            (ExecutionState::AwaitingAssertion, StepKind::AssertStatus(expected)) => {
                let actual = ctx.response.as_ref().map(|r| r.status).ok_or_else(|| {
                    BddError::IncompleteScenario("no response was recorded".to_string())
                })?;
                if actual != expected {
                    return Err(BddError::AssertionFailure { expected, actual });
                }
                ctx.state = ExecutionState::Done;
                Ok(())
            }
            (state, kind) => Err(BddError::StepOutOfOrder {
                step: kind.name().to_string(),
                state: state.to_string(),
            }),
        }
    }

    fn send(&mut self, ctx: &mut ScenarioContext, method: HttpMethod) -> Result<HttpResponse> {
        let url = ctx.url.clone().ok_or_else(|| {
            BddError::IncompleteScenario("no endpoint was set".to_string())
        })?;

        match (method.has_body(), ctx.body_requested) {
            (true, false) => {
                tracing::warn!("{} {} sent without the request body step", method, url)
            }
            (false, true) => {
                tracing::warn!("{} {} ignores the requested request body", method, url)
            }
            _ => {}
        }

        if method.synthesizes_payload() && ctx.body.is_none() {
            ctx.body = Some(self.synthesize_body(method)?);
        }

        let body = if method.has_body() {
            Some(
                ctx.body
                    .clone()
                    .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            )
        } else {
            None
        };

        let request = HttpRequest {
            method,
            url,
            query: ctx.query_params.clone(),
            headers: self.headers(),
            body,
        };

        let response = self.transport.send(&request)?;
        tracing::info!("{} {} returned {}", method, request.url, response.status);
        Ok(response)
    }

    fn synthesize_body(&mut self, method: HttpMethod) -> Result<serde_json::Value> {
        let payload = self.synthesizer.synthesize();

        if let Some(ref dir) = self.payload_dir {
            match persist_payload(&payload, method, dir) {
                Ok(path) => tracing::debug!(path = %path.display(), "{} payload written", method),
                Err(e) => tracing::warn!("Failed to persist {} payload: {}", method, e),
            }
        }

        Ok(serde_json::to_value(payload)?)
    }

    fn headers(&self) -> Vec<(String, String)> {
        match self.config.auth_token.as_deref() {
            Some(token) if !token.is_empty() => {
                vec![("Authorization".to_string(), format!("Bearer {}", token))]
            }
            _ => Vec::new(),
        }
    }
}
