use jiff::Timestamp;
use types::{Session, SessionUser};
use uuid::Uuid;

use crate::{routes::ViewId, LazyView, RouteTable, routes::dashboard_routes};

pub fn session_expiring_at(seconds: i64) -> Session {
    Session {
        access_token: "access-token".to_string().into(),
        refresh_token: "refresh-token".to_string().into(),
        expires_at: Timestamp::from_second(seconds).unwrap(),
        user: SessionUser {
            id: Uuid::nil(),
            email: Some("front.desk@example.org".into()),
        },
    }
}

/// Valid until 2100.
pub fn session() -> Session {
    session_expiring_at(4_102_444_800)
}

pub fn expired_session() -> Session {
    session_expiring_at(1_000_000_000)
}

pub fn table() -> RouteTable<ViewId> {
    dashboard_routes(LazyView::ready).unwrap()
}
