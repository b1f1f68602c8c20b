//! # Configure-BIOS Task Controller
//!
//! Sequences topology resolution, the eligibility check, the remote call and
//! the optional cleanup, then reports one terminal outcome. Each stage runs
//! only after the previous one has resolved; any error short-circuits to the
//! failure report.

use crate::config::ConfigurationResolver;
use crate::constants::task::INJECTABLE_NAME;
use crate::eligibility::{Eligibility, EligibilityResolver};
use crate::error::{BiosTaskError, Result};
use crate::invoker::{RemoteConfigurationInvoker, RemoteResponse};
use crate::logging::log_task_operation;
use crate::models::{ConfigureBiosOptions, TaskContext};
use crate::services::{Encryption, NodeStore};
use crate::state_machine::{TaskEvent, TaskStateMachine};
use crate::task::reporter::CompletionReporter;
use crate::task::traits::{StagedFileCleaner, TaskCompletion, TaskLifecycle};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Terminal outcome of one run
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    /// Microservice accepted the configuration
    Succeeded { response: RemoteResponse },
    /// Node class not applicable; nothing was sent
    Skipped { node_type: String },
    Failed(BiosTaskError),
}

impl TaskOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&BiosTaskError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Collaborators shared by every task instance
#[derive(Clone)]
pub struct TaskServices {
    pub configuration: ConfigurationResolver,
    pub store: Arc<dyn NodeStore>,
    pub transport: Arc<dyn HttpTransport>,
    pub encryption: Arc<dyn Encryption>,
    pub cleaner: Arc<dyn StagedFileCleaner>,
    pub completion: Arc<dyn TaskCompletion>,
}

pub struct ConfigureBiosTask {
    options: ConfigureBiosOptions,
    context: TaskContext,
    configuration: ConfigurationResolver,
    eligibility: EligibilityResolver,
    invoker: RemoteConfigurationInvoker,
    cleaner: Arc<dyn StagedFileCleaner>,
    reporter: CompletionReporter,
}

impl ConfigureBiosTask {
    pub fn new(options: ConfigureBiosOptions, context: TaskContext, services: TaskServices) -> Self {
        Self {
            options,
            context,
            configuration: services.configuration,
            eligibility: EligibilityResolver::new(services.store),
            invoker: RemoteConfigurationInvoker::new(services.transport, services.encryption),
            cleaner: services.cleaner,
            reporter: CompletionReporter::new(services.completion),
        }
    }

    /// Replace the invoker, e.g. to shorten its receive timeout
    pub fn with_invoker(mut self, invoker: RemoteConfigurationInvoker) -> Self {
        self.invoker = invoker;
        self
    }

    pub fn context(&self) -> &TaskContext {
        &self.context
    }

    pub fn options(&self) -> &ConfigureBiosOptions {
        &self.options
    }

    async fn execute(&self, state_machine: &mut TaskStateMachine) -> Result<TaskOutcome> {
        let topology = self.configuration.resolve()?;
        state_machine.transition(TaskEvent::Begin)?;

        let obm = match self.eligibility.resolve(&self.context.target).await? {
            Eligibility::Eligible(obm) => obm,
            Eligibility::Skip { node_type } => {
                state_machine.transition(TaskEvent::Skip {
                    node_type: node_type.clone(),
                })?;
                return Ok(TaskOutcome::Skipped { node_type });
            }
        };
        state_machine.transition(TaskEvent::Eligible)?;

        let response = self.invoker.invoke(&topology, &self.options, &obm).await?;
        state_machine.transition(TaskEvent::Invoked)?;

        self.cleanup_staged_file();
        state_machine.transition(TaskEvent::Finish)?;

        Ok(TaskOutcome::Succeeded { response })
    }

    fn cleanup_staged_file(&self) {
        if !self.options.cleanup {
            return;
        }

        match self.options.staged_file_path() {
            Some(path) => {
                debug!(path = %path.display(), "Discarding staged configuration file");
                self.cleaner.discard(path);
            }
            None => warn!(
                node_id = %self.context.target,
                "Cleanup requested but shareName/fileName are not set"
            ),
        }
    }
}

#[async_trait]
impl TaskLifecycle for ConfigureBiosTask {
    #[instrument(skip(self), fields(task_id = %self.context.task_id, node_id = %self.context.target))]
    async fn run(&self) -> TaskOutcome {
        let task_id = self.context.task_id.to_string();
        log_task_operation(self.task_name(), &task_id, &self.context.target, "started", None);

        let mut state_machine = TaskStateMachine::new();
        let outcome = match self.execute(&mut state_machine).await {
            Ok(outcome) => outcome,
            Err(err) => {
                if let Err(transition_error) =
                    state_machine.transition(TaskEvent::fail_with_error(err.to_string()))
                {
                    debug!(error = %transition_error, "Failure transition rejected");
                }
                TaskOutcome::Failed(err)
            }
        };

        let final_state = state_machine.current_state();
        match &outcome {
            TaskOutcome::Failed(err) => error!(
                state = %final_state,
                error = %err,
                error_code = err.error_code(),
                "Configure BIOS task failed"
            ),
            TaskOutcome::Skipped { node_type } => info!(
                state = %final_state,
                node_type = %node_type,
                "Configure BIOS task skipped"
            ),
            TaskOutcome::Succeeded { .. } => {
                info!(state = %final_state, "Configure BIOS task complete")
            }
        }

        self.reporter.report(outcome.error()).await;
        log_task_operation(
            self.task_name(),
            &task_id,
            &self.context.target,
            &final_state.to_string(),
            outcome.error().map(|err| err.error_code()),
        );

        outcome
    }

    fn task_name(&self) -> &'static str {
        INJECTABLE_NAME
    }
}
