use crate::domain::{AppError, Invocation};
use crate::ports::{BackgroundProcess, ProcessOutcome, ProcessRunner};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Records invocations and replays a scripted outcome.
#[derive(Clone)]
pub struct FakeProcessRunner {
    pub runs: Arc<Mutex<Vec<Invocation>>>,
    pub spawned: Arc<Mutex<Vec<Invocation>>>,
    pub stopped: Arc<Mutex<usize>>,
    pub outcome: ProcessOutcome,
    pub available_programs: HashSet<String>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::with_outcome(ProcessOutcome::Success)
    }

    pub fn with_outcome(outcome: ProcessOutcome) -> Self {
        Self {
            runs: Arc::new(Mutex::new(vec![])),
            spawned: Arc::new(Mutex::new(vec![])),
            stopped: Arc::new(Mutex::new(0)),
            outcome,
            available_programs: HashSet::new(),
        }
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.available_programs.insert(program.to_string());
        self
    }

    pub fn get_runs(&self) -> Vec<Invocation> {
        self.runs.lock().unwrap().clone()
    }

    pub fn get_spawned(&self) -> Vec<Invocation> {
        self.spawned.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        *self.stopped.lock().unwrap()
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome, AppError> {
        self.runs.lock().unwrap().push(invocation.clone());
        Ok(self.outcome)
    }

    fn spawn(&self, invocation: &Invocation) -> Result<Box<dyn BackgroundProcess>, AppError> {
        self.spawned.lock().unwrap().push(invocation.clone());
        Ok(Box::new(FakeBackgroundProcess { stopped: Arc::clone(&self.stopped) }))
    }

    fn locate(&self, program: &str, cwd: &Path) -> Option<PathBuf> {
        self.available_programs.contains(program).then(|| cwd.join(program))
    }
}

struct FakeBackgroundProcess {
    stopped: Arc<Mutex<usize>>,
}

impl BackgroundProcess for FakeBackgroundProcess {
    fn stop(&mut self) -> Result<(), AppError> {
        *self.stopped.lock().unwrap() += 1;
        Ok(())
    }
}
