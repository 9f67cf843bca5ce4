//! Per-browser survey sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::{HeaderMap, header::COOKIE};
use raqt::Session;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "raqt_session";

struct Entry {
    session: Session,
    last_seen: Instant,
}

/// Sessions keyed by id, each isolated from the others.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Entry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Run `f` against the session with this id, creating a fresh one if the
    /// id is unknown or has expired.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.inner.lock().await;
        let now = Instant::now();
        purge(&mut sessions, now, self.ttl);

        let entry = sessions.entry(id).or_insert_with(|| {
            tracing::info!(%id, "new session");
            Entry {
                session: Session::new(),
                last_seen: now,
            }
        });
        entry.last_seen = now;
        f(&mut entry.session)
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Drop sessions idle for longer than the ttl.
fn purge(sessions: &mut HashMap<Uuid, Entry>, now: Instant, ttl: Duration) {
    sessions.retain(|id, entry| {
        let keep = now.duration_since(entry.last_seen) <= ttl;
        if !keep {
            tracing::debug!(%id, "session expired");
        }
        keep
    });
}

/// The session id from the request cookies, if present and well-formed.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value).ok())
}

/// `Set-Cookie` value for a new session.
pub fn session_cookie(id: Uuid) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use raqt::SurveyEvent;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        store.update(a, |s| s.apply(SurveyEvent::SetExport(true))).await;
        assert!(store.update(a, |s| s.export_enabled()).await);
        assert!(!store.update(b, |s| s.export_enabled()).await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn idle_sessions_expire() {
        let store = SessionStore::new(Duration::from_millis(10));
        let id = Uuid::new_v4();
        store.update(id, |s| s.apply(SurveyEvent::SetExport(true))).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        // Touching another session drops the idle one.
        store.update(Uuid::new_v4(), |_| ()).await;
        assert_eq!(store.len().await, 1);
        assert!(!store.update(id, |s| s.export_enabled()).await);
    }

    #[test]
    fn reads_session_cookie() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}")).unwrap(),
        );
        assert_eq!(session_id(&headers), Some(id));
    }

    #[test]
    fn ignores_malformed_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("raqt_session=nope"));
        assert_eq!(session_id(&headers), None);
        assert_eq!(session_id(&HeaderMap::new()), None);
    }
}
