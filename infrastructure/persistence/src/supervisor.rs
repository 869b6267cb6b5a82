use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sqlx::PgPool;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::db::{DatabaseConfig, DatabaseError, create_postgres_pool, ping, run_migrations};

/// Which configured database is currently serving queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRole {
    Primary,
    Fallback,
}

impl ConnectionRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionRole::Primary => "primary",
            ConnectionRole::Fallback => "fallback",
        }
    }

    fn standby(self) -> Self {
        match self {
            ConnectionRole::Primary => ConnectionRole::Fallback,
            ConnectionRole::Fallback => ConnectionRole::Primary,
        }
    }
}

impl fmt::Display for ConnectionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transition rule applied after each health probe.
///
/// `fallback_healthy` is `None` when no fallback is configured. A healthy
/// primary always wins; otherwise a healthy fallback takes over; when neither
/// is usable the current role is kept.
pub fn next_role(
    current: ConnectionRole,
    primary_healthy: bool,
    fallback_healthy: Option<bool>,
) -> ConnectionRole {
    if primary_healthy {
        return ConnectionRole::Primary;
    }
    match fallback_healthy {
        Some(true) => ConnectionRole::Fallback,
        _ => current,
    }
}

/// What a probe learned about one pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub reachable: bool,
    pub schema_ready: bool,
}

impl PoolStatus {
    pub const DOWN: PoolStatus = PoolStatus {
        reachable: false,
        schema_ready: false,
    };

    /// A pool only serves queries once it answers and carries the schema.
    pub fn is_usable(&self) -> bool {
        self.reachable && self.schema_ready
    }
}

/// [`next_role`] over full pool statuses: an unmigrated pool never takes over.
pub fn next_role_for(
    current: ConnectionRole,
    primary: PoolStatus,
    fallback: Option<PoolStatus>,
) -> ConnectionRole {
    next_role(
        current,
        primary.is_usable(),
        fallback.map(|status| status.is_usable()),
    )
}

/// Owns the primary and optional fallback pools and routes queries to the
/// active one.
pub struct ConnectionSupervisor {
    primary: PgPool,
    fallback: Option<PgPool>,
    role: RwLock<ConnectionRole>,
    migrations_path: Option<String>,
    primary_schema_ready: AtomicBool,
    fallback_schema_ready: AtomicBool,
}

impl ConnectionSupervisor {
    /// Connects to the primary, or to the fallback when the primary is down.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let primary = create_postgres_pool(&config.connection_string, config)?;
        let fallback = match &config.fallback_connection_string {
            Some(url) => Some(create_postgres_pool(url, config)?),
            None => None,
        };

        let role = if ping(&primary).await {
            ConnectionRole::Primary
        } else {
            tracing::warn!("Primary database unreachable at startup");
            match &fallback {
                Some(pool) if ping(pool).await => ConnectionRole::Fallback,
                _ => {
                    tracing::error!("No database reachable at startup");
                    return Err(DatabaseError::ConnectionError);
                }
            }
        };

        tracing::info!(role = %role, "Database connection established");
        Ok(Self::from_pools(primary, fallback, role))
    }

    pub fn from_pools(primary: PgPool, fallback: Option<PgPool>, role: ConnectionRole) -> Self {
        Self {
            primary,
            fallback,
            role: RwLock::new(role),
            migrations_path: None,
            primary_schema_ready: AtomicBool::new(true),
            fallback_schema_ready: AtomicBool::new(true),
        }
    }

    /// Manages the schema from `path`: no pool is considered ready until
    /// these migrations ran against it.
    pub fn with_migrations(mut self, path: impl Into<String>) -> Self {
        self.migrations_path = Some(path.into());
        self.primary_schema_ready = AtomicBool::new(false);
        self.fallback_schema_ready = AtomicBool::new(false);
        self
    }

    fn pool_for(&self, role: ConnectionRole) -> Option<&PgPool> {
        match role {
            ConnectionRole::Primary => Some(&self.primary),
            ConnectionRole::Fallback => self.fallback.as_ref(),
        }
    }

    fn schema_flag(&self, role: ConnectionRole) -> &AtomicBool {
        match role {
            ConnectionRole::Primary => &self.primary_schema_ready,
            ConnectionRole::Fallback => &self.fallback_schema_ready,
        }
    }

    pub fn schema_ready(&self, role: ConnectionRole) -> bool {
        self.schema_flag(role).load(Ordering::Acquire)
    }

    /// Runs the migrations against `role`'s pool unless they already ran.
    async fn ensure_schema(&self, role: ConnectionRole) -> bool {
        if self.schema_ready(role) {
            return true;
        }
        let (Some(pool), Some(path)) = (self.pool_for(role), &self.migrations_path) else {
            return false;
        };
        match run_migrations(pool, path).await {
            Ok(()) => {
                self.schema_flag(role).store(true, Ordering::Release);
                tracing::info!(role = %role, "Database schema migrated");
                true
            }
            Err(_) => {
                tracing::warn!(role = %role, "Database schema not ready");
                false
            }
        }
    }

    async fn status(&self, role: ConnectionRole) -> Option<PoolStatus> {
        let pool = self.pool_for(role)?;
        let reachable = ping(pool).await;
        let schema_ready = if reachable {
            self.ensure_schema(role).await
        } else {
            self.schema_ready(role)
        };
        Some(PoolStatus {
            reachable,
            schema_ready,
        })
    }

    /// Migrates the active pool and, when reachable, the standby one.
    ///
    /// # Errors
    /// Returns error when the active pool cannot be migrated
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        let active = self.role().await;
        if !self.ensure_schema(active).await {
            return Err(DatabaseError::MigrationError);
        }

        let standby = active.standby();
        match self.pool_for(standby) {
            Some(pool) if ping(pool).await => {
                self.ensure_schema(standby).await;
            }
            Some(_) => {
                tracing::warn!(role = %standby, "Standby database unreachable, migrating on recovery");
            }
            None => {}
        }
        Ok(())
    }

    pub async fn role(&self) -> ConnectionRole {
        *self.role.read().await
    }

    /// Pool for the active role. Cloning a `PgPool` only clones a handle.
    pub async fn pool(&self) -> PgPool {
        match (*self.role.read().await, &self.fallback) {
            (ConnectionRole::Fallback, Some(fallback)) => fallback.clone(),
            _ => self.primary.clone(),
        }
    }

    /// Pings the databases and switches role when the transition rule says so.
    ///
    /// A pool that comes back without the schema is migrated before it can
    /// take over.
    pub async fn probe(&self) -> ConnectionRole {
        let primary = self
            .status(ConnectionRole::Primary)
            .await
            .unwrap_or(PoolStatus::DOWN);
        let fallback = if primary.is_usable() {
            None
        } else {
            self.status(ConnectionRole::Fallback).await
        };

        let mut role = self.role.write().await;
        let current = *role;
        let next = next_role_for(current, primary, fallback);
        if next != current {
            tracing::warn!(from = %current, to = %next, "Switching database connection");
            *role = next;
        } else if !primary.is_usable() {
            tracing::warn!(role = %next, "Primary database still unhealthy");
        }
        next
    }

    /// Runs [`probe`](Self::probe) on a fixed interval until the task is aborted.
    pub fn spawn_health_probe(self: Arc<Self>, interval: time::Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately; startup already checked.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.probe().await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DatabaseConfig;
    use ConnectionRole::{Fallback, Primary};

    #[test]
    fn should_cover_every_transition() {
        let cases = [
            (Primary, true, None, Primary),
            (Primary, false, None, Primary),
            (Primary, true, Some(true), Primary),
            (Primary, true, Some(false), Primary),
            (Primary, false, Some(true), Fallback),
            (Primary, false, Some(false), Primary),
            (Fallback, true, None, Primary),
            (Fallback, false, None, Fallback),
            (Fallback, true, Some(true), Primary),
            (Fallback, true, Some(false), Primary),
            (Fallback, false, Some(true), Fallback),
            (Fallback, false, Some(false), Fallback),
        ];

        for (current, primary, fallback, expected) in cases {
            assert_eq!(
                next_role(current, primary, fallback),
                expected,
                "current={current:?} primary={primary} fallback={fallback:?}"
            );
        }
    }

    #[test]
    fn should_switch_only_to_a_migrated_pool() {
        let down = PoolStatus::DOWN;
        let unmigrated = PoolStatus {
            reachable: true,
            schema_ready: false,
        };
        let ready = PoolStatus {
            reachable: true,
            schema_ready: true,
        };
        let cases = [
            (Primary, down, Some(unmigrated), Primary),
            (Primary, down, Some(ready), Fallback),
            (Primary, unmigrated, Some(ready), Fallback),
            (Fallback, unmigrated, Some(ready), Fallback),
            (Fallback, unmigrated, Some(down), Fallback),
            (Fallback, ready, Some(unmigrated), Primary),
            (Primary, unmigrated, None, Primary),
        ];

        for (current, primary, fallback, expected) in cases {
            assert_eq!(
                next_role_for(current, primary, fallback),
                expected,
                "current={current:?} primary={primary:?} fallback={fallback:?}"
            );
        }
    }

    fn unreachable_pool() -> PgPool {
        let config = DatabaseConfig::new("postgres://localhost:1/catalog".to_string());
        create_postgres_pool(&config.connection_string, &config).unwrap()
    }

    #[tokio::test]
    async fn should_treat_unmanaged_schema_as_ready() {
        let supervisor =
            ConnectionSupervisor::from_pools(unreachable_pool(), Some(unreachable_pool()), Primary);

        assert!(supervisor.schema_ready(Primary));
        assert!(supervisor.schema_ready(Fallback));
    }

    #[tokio::test]
    async fn should_keep_pools_unready_until_migrations_run() {
        let supervisor =
            ConnectionSupervisor::from_pools(unreachable_pool(), Some(unreachable_pool()), Primary)
                .with_migrations("/definitely/not/here");

        assert!(!supervisor.schema_ready(Primary));
        assert!(!supervisor.schema_ready(Fallback));
        assert!(!supervisor.ensure_schema(Fallback).await);
        assert!(!supervisor.schema_ready(Fallback));
    }

    #[tokio::test]
    async fn should_fail_migrate_when_active_pool_cannot_be_migrated() {
        let supervisor = ConnectionSupervisor::from_pools(unreachable_pool(), None, Primary)
            .with_migrations("/definitely/not/here");

        let result = supervisor.migrate().await;

        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }

    #[test]
    fn should_render_role_names() {
        assert_eq!(Primary.to_string(), "primary");
        assert_eq!(Fallback.to_string(), "fallback");
    }

    #[tokio::test]
    async fn should_route_to_primary_when_fallback_is_missing() {
        let config = DatabaseConfig::new("postgres://localhost:1/catalog".to_string());
        let primary = create_postgres_pool(&config.connection_string, &config).unwrap();
        let supervisor = ConnectionSupervisor::from_pools(primary, None, Fallback);

        assert_eq!(supervisor.role().await, Fallback);
        // Without a fallback pool the primary is the only candidate.
        let pool = supervisor.pool().await;
        assert!(!pool.is_closed());
    }
}
