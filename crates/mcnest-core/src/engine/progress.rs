/// Events the rollout search emits while it runs. Only events the engine
/// actually produces are modeled here; consumers render them however they
/// like (the CLI draws a spinner and a rollout bar).
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// The rollout loop is about to begin; `total_rollouts` cycles follow.
    SearchStart { total_rollouts: u64 },
    /// One generate-evaluate-select cycle finished.
    RolloutComplete { generation: u64, score: f64 },
    /// The best-so-far candidate was replaced.
    BestImproved { generation: u64, score: f64 },
    /// The rollout budget is exhausted.
    SearchFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
