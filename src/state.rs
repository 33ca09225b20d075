use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::submissions::SubmissionLog;

pub struct AppState {
    pub config: Config,
    pub start_time: DateTime<Utc>,
    pub submissions: SubmissionLog,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let submissions = SubmissionLog::new(config.submissions_path());
        Self {
            config,
            start_time: Utc::now(),
            submissions,
        }
    }
}
