//! # Vending Machine Service
//!
//! Wires the upgrade controller to the event bus, the clock, and the payout
//! sink, and implements the inbound API. A single `RwLock` around the
//! controller is the machine's one serialization point: every operation
//! takes the write lock, so concurrent calls execute as if one at a time.
//!
//! Notices are published only after an operation commits; a failed operation
//! publishes nothing.

use crate::domain::entities::{PurchaseReceipt, RestockReceipt, WithdrawalReceipt};
use crate::domain::value_objects::{AccountId, LowStockNotice, U256};
use crate::errors::MachineError;
use crate::ports::inbound::VendingMachineApi;
use crate::ports::outbound::{PayoutSink, TimeSource};
use crate::proxy::UpgradeProxy;
use crate::versions::LogicVersion;

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use vendo_bus::{EventPublisher, InMemoryEventBus, MachineEvent};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Vending machine service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Units loaded at deployment.
    pub initial_inventory: u64,
    /// Event channel capacity.
    pub channel_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            initial_inventory: 100,
            channel_capacity: vendo_bus::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

/// Statistics for the vending machine service.
#[derive(Debug, Default, Clone)]
pub struct ServiceStats {
    /// Total operations attempted.
    pub operations: u64,
    /// Operations that failed and committed nothing.
    pub failed_operations: u64,
    /// Calls rejected for lack of owner authority.
    pub rejected_calls: u64,
    /// Low-stock notices published.
    pub events_emitted: u64,
    /// Total wei received from purchases.
    pub total_received: U256,
    /// Total wei paid out through withdrawals.
    pub total_withdrawn: U256,
}

// =============================================================================
// SERVICE
// =============================================================================

/// The main vending machine service.
///
/// Generic over clock and payout sink so tests can substitute a manual
/// clock and an observable treasury.
pub struct VendingService<C: TimeSource, P: PayoutSink> {
    proxy: RwLock<UpgradeProxy>,
    clock: Arc<C>,
    treasury: Arc<P>,
    bus: Arc<InMemoryEventBus>,
    stats: RwLock<ServiceStats>,
}

impl<C: TimeSource, P: PayoutSink> VendingService<C, P> {
    /// Deploys a new machine owned by `owner`, bound to v1.
    pub fn new(config: ServiceConfig, owner: AccountId, clock: Arc<C>, treasury: Arc<P>) -> Self {
        info!(
            owner = %owner,
            inventory = config.initial_inventory,
            "Vending machine deployed"
        );
        Self {
            proxy: RwLock::new(UpgradeProxy::initialize(config.initial_inventory, owner)),
            clock,
            treasury,
            bus: Arc::new(InMemoryEventBus::with_capacity(config.channel_capacity)),
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// The event bus notices are published on.
    #[must_use]
    pub fn bus(&self) -> Arc<InMemoryEventBus> {
        Arc::clone(&self.bus)
    }

    /// Current service statistics.
    pub async fn stats(&self) -> ServiceStats {
        self.stats.read().await.clone()
    }

    async fn publish_notices(&self, notices: &[LowStockNotice]) {
        for notice in notices {
            warn!(
                owner = %notice.owner,
                inventory = notice.inventory,
                "Low stock"
            );
            self.bus.publish(MachineEvent::LowStock(*notice)).await;
        }
        if !notices.is_empty() {
            self.stats.write().await.events_emitted += notices.len() as u64;
        }
    }

    async fn record_failure(&self, err: &MachineError) {
        let mut stats = self.stats.write().await;
        stats.operations += 1;
        stats.failed_operations += 1;
        if err.is_unauthorized() {
            stats.rejected_calls += 1;
        }
    }
}

#[async_trait]
impl<C: TimeSource, P: PayoutSink> VendingMachineApi for VendingService<C, P> {
    #[instrument(skip(self), fields(correlation_id = %Uuid::new_v4()))]
    async fn purchase(
        &self,
        caller: AccountId,
        payment: U256,
    ) -> Result<PurchaseReceipt, MachineError> {
        // The lock is held through publication so notices reach the bus in
        // commit order.
        let mut proxy = self.proxy.write().await;
        match proxy.purchase(payment) {
            Ok(receipt) => {
                debug!(
                    caller = %caller,
                    units = receipt.units,
                    remaining = receipt.inventory_remaining,
                    "Purchase dispensed"
                );
                {
                    let mut stats = self.stats.write().await;
                    stats.operations += 1;
                    stats.total_received = stats.total_received.saturating_add(payment);
                }
                self.publish_notices(&receipt.events).await;
                Ok(receipt)
            }
            Err(err) => {
                warn!(caller = %caller, error = %err, "Purchase rejected");
                self.record_failure(&err).await;
                Err(err)
            }
        }
    }

    #[instrument(skip(self), fields(correlation_id = %Uuid::new_v4()))]
    async fn withdraw(&self, caller: AccountId) -> Result<WithdrawalReceipt, MachineError> {
        let now = self.clock.now();
        // As with purchase, publication happens under the lock.
        let mut proxy = self.proxy.write().await;
        match proxy.withdraw(caller, now, self.treasury.as_ref()) {
            Ok(receipt) => {
                info!(
                    caller = %caller,
                    payout = %receipt.payout,
                    "Profit withdrawn"
                );
                {
                    let mut stats = self.stats.write().await;
                    stats.operations += 1;
                    stats.total_withdrawn = stats.total_withdrawn.saturating_add(receipt.payout);
                }
                self.publish_notices(&receipt.events).await;
                Ok(receipt)
            }
            Err(err) => {
                warn!(caller = %caller, error = %err, "Withdrawal rejected");
                self.record_failure(&err).await;
                Err(err)
            }
        }
    }

    #[instrument(skip(self), fields(correlation_id = %Uuid::new_v4()))]
    async fn restock(
        &self,
        caller: AccountId,
        amount: u64,
    ) -> Result<RestockReceipt, MachineError> {
        let result = {
            let mut proxy = self.proxy.write().await;
            proxy.restock(caller, amount)
        };

        match result {
            Ok(receipt) => {
                info!(
                    caller = %caller,
                    added = receipt.added,
                    inventory = receipt.inventory,
                    "Restocked"
                );
                self.stats.write().await.operations += 1;
                Ok(receipt)
            }
            Err(err) => {
                warn!(caller = %caller, error = %err, "Restock rejected");
                self.record_failure(&err).await;
                Err(err)
            }
        }
    }

    #[instrument(skip(self), fields(correlation_id = %Uuid::new_v4()))]
    async fn upgrade(&self, caller: AccountId, target: LogicVersion) -> Result<(), MachineError> {
        let result = {
            let mut proxy = self.proxy.write().await;
            let from = proxy.active_version();
            proxy.upgrade(caller, target).map(|()| from)
        };

        match result {
            Ok(from) => {
                info!(%from, to = %target, "Logic upgraded");
                self.stats.write().await.operations += 1;
                Ok(())
            }
            Err(err) => {
                warn!(caller = %caller, to = %target, error = %err, "Upgrade rejected");
                self.record_failure(&err).await;
                Err(err)
            }
        }
    }

    async fn active_version(&self) -> LogicVersion {
        self.proxy.read().await.active_version()
    }

    async fn inventory(&self) -> u64 {
        self.proxy.read().await.inventory()
    }

    async fn profit(&self) -> U256 {
        self.proxy.read().await.profit()
    }

    async fn owner(&self) -> AccountId {
        self.proxy.read().await.owner()
    }
}

// =============================================================================
// TEST SUPPORT
// =============================================================================

/// Builds a service on a manual clock and an in-memory treasury.
///
/// The clock starts well past one cooldown so a first withdrawal passes
/// the rate limit.
#[must_use]
pub fn create_test_service(
    owner: AccountId,
) -> VendingService<crate::adapters::ManualClock, crate::adapters::InMemoryTreasury> {
    let clock = Arc::new(crate::adapters::ManualClock::starting_at(1_000_000));
    let treasury = Arc::new(crate::adapters::InMemoryTreasury::new());
    VendingService::new(ServiceConfig::default(), owner, clock, treasury)
}

// =============================================================================
// TESTS
// =============================================================================
