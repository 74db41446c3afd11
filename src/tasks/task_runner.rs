use log::info;

type Task = Box<dyn FnOnce() + Send>;

/// Collects named background jobs and launches them together.
pub struct TaskRunner {
    tasks: Vec<(&'static str, Task)>,
}

impl TaskRunner {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn add_task<F>(&mut self, name: &'static str, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.tasks.push((name, Box::new(task)));
    }

    pub fn start_all(self) {
        for (name, task) in self.tasks {
            info!("event=task_start task={}", name);
            task();
        }
    }
}

impl Default for TaskRunner {
    fn default() -> Self {
        Self::new()
    }
}
