use anyhow::Result;
use async_trait::async_trait;
use std::{path::Path, sync::Mutex};

use crate::{CommandOutput, CommandRunner};

/// Records every call and answers with the first canned output whose prefix matches.
/// Unmatched calls succeed with empty output.
#[derive(Default)]
pub struct MockRunner {
    responses: Vec<(Vec<String>, CommandOutput)>,
    calls: Mutex<Vec<Vec<String>>>,
}

fn has_prefix(call: &[String], prefix: &[String]) -> bool {
    call.len() >= prefix.len() && call.iter().zip(prefix).all(|(a, b)| a == b)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl MockRunner {
    pub fn respond(mut self, prefix: &[&str], output: CommandOutput) -> Self {
        self.responses.push((to_strings(prefix), output));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_starting_with(&self, prefix: &[&str]) -> Vec<Vec<String>> {
        let prefix = to_strings(prefix);
        self.calls()
            .into_iter()
            .filter(|call| has_prefix(call, &prefix))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, program: &str, args: &[&str], _cwd: Option<&Path>) -> Result<CommandOutput> {
        let mut call = vec![program.to_string()];
        call.extend(to_strings(args));
        self.calls.lock().unwrap().push(call.clone());
        Ok(self
            .responses
            .iter()
            .find(|(prefix, _)| has_prefix(&call, prefix))
            .map_or_else(|| CommandOutput::success(""), |(_, output)| output.clone()))
    }
}
