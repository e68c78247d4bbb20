//! G-code processor pipeline
//!
//! Threads commands through an ordered sequence of processors and keeps
//! the caller's [`GcodeState`] current between lines.

use gcodeflow_core::{Error, Result};

use crate::command::GcodeCommand;
use crate::processors::ProcessorHandle;
use crate::state::GcodeState;

/// Ordered sequence of command processors
///
/// Processors are applied in registration order. Each may transform a
/// command, drop it, or expand it into several; expansion output from
/// one processor feeds the next.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use gcodeflow_preprocessor::{
///     ArcExpander, CommentProcessor, GcodeState, ProcessorPipeline, WhitespaceProcessor,
/// };
///
/// let mut pipeline = ProcessorPipeline::new();
/// pipeline
///     .register(Arc::new(CommentProcessor::new()))
///     .register(Arc::new(ArcExpander::with_segment_length(0.5)))
///     .register(Arc::new(WhitespaceProcessor::new()));
///
/// let mut state = GcodeState::new();
/// let commands = pipeline
///     .process_program("G0 X10 Y0\nG2 X-10 Y0 I-10 J0 (half turn)", &mut state)
///     .unwrap();
/// assert!(commands.len() > 2);
/// ```
#[derive(Default)]
pub struct ProcessorPipeline {
    processors: Vec<ProcessorHandle>,
}

impl ProcessorPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Register a processor at the end of the pipeline
    pub fn register(&mut self, processor: ProcessorHandle) -> &mut Self {
        self.processors.push(processor);
        self
    }

    /// Register several processors at once, in order
    pub fn register_all(&mut self, processors: Vec<ProcessorHandle>) -> &mut Self {
        self.processors.extend(processors);
        self
    }

    /// Number of registered processors
    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    /// Look up a processor by name
    pub fn get_processor_by_name(&self, name: &str) -> Option<&ProcessorHandle> {
        self.processors.iter().find(|p| p.name() == name)
    }

    /// Run one command through every enabled processor.
    ///
    /// Returns the surviving commands; an empty vector means the line
    /// was dropped (comment-only, blank). Processor failures are logged
    /// and surfaced as [`Error::Processor`].
    pub fn process_command(
        &self,
        command: &GcodeCommand,
        state: &GcodeState,
    ) -> Result<Vec<GcodeCommand>> {
        let mut current = vec![command.clone()];

        for processor in &self.processors {
            if !processor.is_enabled() {
                continue;
            }

            let mut next = Vec::new();
            for cmd in current {
                match processor.process(&cmd, state) {
                    Ok(processed) => next.extend(processed),
                    Err(e) => {
                        tracing::warn!(
                            "Processor '{}' failed on command '{}': {}",
                            processor.name(),
                            cmd.command,
                            e
                        );
                        return Err(Error::Processor {
                            name: processor.name().to_string(),
                            reason: e.to_string(),
                        });
                    }
                }
            }

            current = next;
            if current.is_empty() {
                break;
            }
        }

        Ok(current)
    }

    /// Run a batch of commands through the pipeline.
    ///
    /// The caller's state is folded forward after each emitted command,
    /// so later lines see the position and modes the earlier ones
    /// established.
    pub fn process_commands(
        &self,
        commands: &[GcodeCommand],
        state: &mut GcodeState,
    ) -> Result<Vec<GcodeCommand>> {
        let mut results = Vec::new();

        for command in commands {
            let processed = self.process_command(command, state)?;
            for cmd in processed {
                state.apply_command(&cmd.command);
                results.push(cmd);
            }
        }

        Ok(results)
    }

    /// Split a program into lines and run it through the pipeline.
    ///
    /// Lines are numbered from 1. Blank lines are dropped before they
    /// reach the processors.
    pub fn process_program(&self, program: &str, state: &mut GcodeState) -> Result<Vec<GcodeCommand>> {
        let commands: Vec<GcodeCommand> = program
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| GcodeCommand::with_line_number(line, i as u32 + 1))
            .collect();

        self.process_commands(&commands, state)
    }

    /// Remove every processor from the pipeline
    pub fn clear(&mut self) {
        self.processors.clear();
    }
}
