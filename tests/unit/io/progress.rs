//! Tests for progress tracking and multi-file batch processing

#[cfg(test)]
mod tests {
    use condprep::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use condprep::io::progress::{ProgressManager, STAGES};
    use std::path::Path;
    use std::time::Duration;

    // Tests a full single-file lifecycle
    // Verified by panicking on empty initialization
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();

        pm.initialize(1);
        pm.start_file(0, Path::new("test.png"));
        for _ in STAGES {
            pm.advance_stage(0);
        }
        pm.complete_file(0, Duration::from_millis(100));
        pm.finish();
    }

    // Tests default trait implementation
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let mut pm = ProgressManager::default();
        pm.initialize(2);
        pm.start_file(1, Path::new("second.png"));
        pm.advance_stage(1);
        pm.complete_file(1, Duration::from_millis(5));
        pm.finish();
    }

    // Tests batch mode with more files than individual bars
    // Verified by indexing bars directly by file index
    #[test]
    fn test_batch_mode_rolling_window() {
        let mut pm = ProgressManager::new();
        let count = MAX_INDIVIDUAL_PROGRESS_BARS * 2 + 3;
        pm.initialize(count);

        for index in 0..count {
            pm.start_file(index, Path::new(&format!("file_{index}.png")));
            pm.advance_stage(index);
            pm.complete_file(index, Duration::from_millis(1));
        }
        pm.finish();
    }

    // Tests extra stage advances saturate and unknown indices are ignored
    // Verified by removing the stage cap
    #[test]
    fn test_stage_overflow_and_unknown_index() {
        let mut pm = ProgressManager::new();
        pm.initialize(1);
        pm.advance_stage(7);
        pm.start_file(0, Path::new("a.png"));
        for _ in 0..STAGES.len() * 3 {
            pm.advance_stage(0);
        }
        pm.complete_file(3, Duration::ZERO);
        pm.finish();
    }
}
