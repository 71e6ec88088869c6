#![allow(dead_code)]

use std::future;
use std::io;
use std::sync::{
    Arc, Mutex, Once,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use cloudshop::error::ConnectError;
use cloudshop::models::AppState;
use cloudshop::services::connector::{DbConnector, DbHandle, RetryPolicy};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::MakeWriter;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("cloudshop=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Log sink that keeps every formatted line in memory.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Installs a subscriber writing into this sink for the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Lines containing `needle`.
    pub fn lines_with(&self, needle: &str) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// How a [`MockConnector`] answers connection attempts.
#[derive(Debug, Clone, Copy)]
pub enum Script {
    /// Fail the first `n` attempts, then succeed.
    FailFirst(usize),
    /// Fail every attempt.
    AlwaysFail,
    /// Never complete an attempt.
    Hang,
}

/// Call counters shared between a mock connector and the handles it opens.
#[derive(Debug, Default)]
pub struct Calls {
    connects: AtomicUsize,
    closes: AtomicUsize,
}

impl Calls {
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// A mock connector that counts connect and close calls.
#[derive(Debug)]
pub struct MockConnector {
    script: Script,
    fail_close: bool,
    calls: Arc<Calls>,
}

impl MockConnector {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            fail_close: false,
            calls: Arc::new(Calls::default()),
        }
    }

    /// Handles opened by this connector report an error when closed.
    pub fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub fn calls(&self) -> Arc<Calls> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl DbConnector for MockConnector {
    async fn connect(&self) -> Result<Box<dyn DbHandle>, ConnectError> {
        let attempt = self.calls.connects.fetch_add(1, Ordering::SeqCst) + 1;

        let succeed = match self.script {
            Script::FailFirst(n) => attempt > n,
            Script::AlwaysFail => false,
            Script::Hang => future::pending().await,
        };

        if succeed {
            Ok(Box::new(MockHandle {
                fail_close: self.fail_close,
                calls: Arc::clone(&self.calls),
            }))
        } else {
            Err(ConnectError::Database(sqlx::Error::PoolTimedOut))
        }
    }
}

struct MockHandle {
    fail_close: bool,
    calls: Arc<Calls>,
}

#[async_trait]
impl DbHandle for MockHandle {
    async fn close(self: Box<Self>) -> Result<(), ConnectError> {
        self.calls.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            Err(ConnectError::Database(sqlx::Error::PoolClosed))
        } else {
            Ok(())
        }
    }
}

/// Retry policy with the default attempt count and a short delay, so HTTP
/// tests on real sockets finish quickly.
pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        delay: Duration::from_millis(10),
        deadline: Duration::from_secs(2),
        ..RetryPolicy::default()
    }
}

/// Spawns the application with the given connector and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(
    connector: Arc<dyn DbConnector>,
    policy: RetryPolicy,
    node_name: Option<&str>,
) -> String {
    init_tracing_once();

    let state = Arc::new(AppState::new(
        connector,
        policy,
        node_name.map(str::to_string),
    ));

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, cloudshop::app(state)).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}
