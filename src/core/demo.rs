use crate::core::{PopOutcome, PopStack};
use crate::utils::error::DemoError;

pub const DEFAULT_URL: &str = "http://example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demo {
    url: String,
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo {
    pub const ID: &'static str = "xyz";

    pub fn new() -> Self {
        Self::with_url(DEFAULT_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Uppercases every element, keeping length and order.
    pub fn to_upper<S: AsRef<str>>(&self, input: &[S]) -> Vec<String> {
        input.iter().map(|s| s.as_ref().to_uppercase()).collect()
    }

    /// Removes and discards the top of `stack`. Failures are logged and
    /// reported in the returned outcome; nothing propagates to the caller.
    pub fn guarded_pop<P: PopStack + ?Sized>(&self, stack: &mut P) -> PopOutcome {
        match stack.try_pop() {
            Ok(top) => {
                tracing::debug!("Popped '{}' from stack", top);
                PopOutcome::Popped(top)
            }
            Err(DemoError::EmptyStack) => {
                tracing::warn!("Pop skipped: stack is empty");
                PopOutcome::Empty
            }
            Err(e) => {
                tracing::error!("Pop failed: {} (Category: {:?})", e, e.category());
                PopOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn vec(&self) -> Vec<i32> {
        vec![1]
    }

    pub fn compute(&self) {
        tracing::trace!("compute delegating to helper");
        self.helper();
    }

    pub fn helper(&self) {
        tracing::trace!("helper called");
    }

    pub fn ids(&self) -> Vec<i32> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    #[test]
    fn test_defaults() {
        let demo = Demo::new();
        assert_eq!(demo.url(), "http://example.com");
        assert_eq!(Demo::ID, "xyz");
        assert_eq!(Demo::with_url("https://other.test").url(), "https://other.test");
    }

    #[test]
    fn test_to_upper_maps_each_element() {
        let demo = Demo::new();
        let input = ["a", "b", "Hello", "straße"];
        let output = demo.to_upper(&input);

        assert_eq!(output.len(), input.len());
        for (i, s) in input.iter().enumerate() {
            assert_eq!(output[i], s.to_uppercase());
        }
        assert_eq!(output[3], "STRASSE");
    }

    #[test]
    fn test_to_upper_empty() {
        let input: Vec<String> = Vec::new();
        assert!(Demo::new().to_upper(&input).is_empty());
    }

    #[test]
    fn test_to_upper_leaves_input_untouched() {
        let input = vec!["x".to_string(), "y".to_string()];
        let _ = Demo::new().to_upper(&input);
        assert_eq!(input, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_guarded_pop_removes_top() {
        let mut stack = vec!["a".to_string()];
        let outcome = Demo::new().guarded_pop(&mut stack);
        assert_eq!(outcome, PopOutcome::Popped("a".to_string()));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_guarded_pop_empty_is_handled() {
        let mut stack: Vec<String> = Vec::new();
        assert_eq!(Demo::new().guarded_pop(&mut stack), PopOutcome::Empty);
    }

    #[test]
    fn test_guarded_pop_poisoned_is_generic_failure() {
        let shared = Arc::new(Mutex::new(vec!["a".to_string()]));
        let clone = Arc::clone(&shared);
        let _ = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let mut stack = Arc::clone(&shared);
        let (outcome, logs) = with_captured_logs(|| Demo::new().guarded_pop(&mut stack));
        match outcome {
            PopOutcome::Failed(msg) => assert!(msg.contains("unusable")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Pop failed"));
        assert!(!logs.contains("stack is empty"));
    }

    #[test]
    fn test_guarded_pop_empty_logs_warning() {
        let mut stack: Vec<String> = Vec::new();
        let (outcome, logs) = with_captured_logs(|| Demo::new().guarded_pop(&mut stack));

        assert_eq!(outcome, PopOutcome::Empty);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Pop skipped: stack is empty"));
        assert!(!logs.contains("ERROR"));
        assert!(!logs.contains("never here"));
    }

    #[test]
    fn test_guarded_pop_on_shared_stack() {
        let shared = Arc::new(Mutex::new(vec!["a".to_string(), "b".to_string()]));
        let mut stack = Arc::clone(&shared);

        assert_eq!(
            Demo::new().guarded_pop(&mut stack),
            PopOutcome::Popped("b".to_string())
        );
        assert_eq!(shared.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_compute_traces_delegation() {
        let ((), logs) = with_captured_logs(|| Demo::new().compute());
        assert!(logs.contains("compute delegating to helper"));
        assert!(logs.contains("helper called"));
    }

    #[test]
    fn test_sequence_factories() {
        let demo = Demo::new();
        assert_eq!(demo.vec(), vec![1]);
        assert_eq!(demo.vec(), vec![1]);

        let mut first = demo.ids();
        let second = demo.ids();
        assert!(first.is_empty());
        first.push(7);
        assert!(second.is_empty());
        assert!(demo.ids().is_empty());
    }

    #[test]
    fn test_compute_has_no_effect() {
        let demo = Demo::new();
        let before = demo.clone();
        demo.compute();
        demo.helper();
        assert_eq!(demo, before);
    }
}
