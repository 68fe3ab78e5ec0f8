//! # Upgrade Lifecycle Tests
//!
//! Drives one machine through the full v1 -> v2 -> v3 -> v4 upgrade chain
//! via the service API, checking at each step that state survives the
//! upgrade and that each version's operation set and behavior take effect
//! immediately.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use vendo_machine::prelude::*;

    const OWNER: AccountId = AccountId::new([0xAAu8; 20]);
    const BUYER: AccountId = AccountId::new([0xBBu8; 20]);

    fn service() -> VendingService<ManualClock, InMemoryTreasury> {
        create_test_service(OWNER)
    }

    // =============================================================================
    // FULL LIFECYCLE
    // =============================================================================

    #[tokio::test]
    async fn test_state_survives_the_full_upgrade_chain() {
        let service = service();

        // v1: four single-unit purchases.
        for _ in 0..4 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }
        assert_eq!(service.inventory().await, 96);
        assert_eq!(service.profit().await, wei(4000));

        // v2: batching takes effect, record is untouched by the upgrade.
        service.upgrade(OWNER, LogicVersion::V2).await.unwrap();
        assert_eq!(service.inventory().await, 96);
        let receipt = service.purchase(BUYER, wei(3000)).await.unwrap();
        assert_eq!(receipt.units, 3);
        assert_eq!(service.inventory().await, 93);

        // v3: withdrawal appears, profit accumulated across versions pays
        // out in one credit.
        service.upgrade(OWNER, LogicVersion::V3).await.unwrap();
        let receipt = service.withdraw(OWNER).await.unwrap();
        assert_eq!(receipt.payout, wei(7000));
        assert!(service.profit().await.is_zero());

        // v4: restock appears.
        service.upgrade(OWNER, LogicVersion::V4).await.unwrap();
        let receipt = service.restock(OWNER, 7).await.unwrap();
        assert_eq!(receipt.inventory, 100);
        assert_eq!(service.inventory().await, 100);
    }

    #[tokio::test]
    async fn test_operations_appear_only_with_their_version() {
        let service = service();

        // v1: neither withdraw nor restock exists.
        assert!(matches!(
            service.withdraw(OWNER).await.unwrap_err(),
            MachineError::Unsupported {
                operation: "withdraw",
                version: LogicVersion::V1,
            }
        ));
        assert!(matches!(
            service.restock(OWNER, 10).await.unwrap_err(),
            MachineError::Unsupported {
                operation: "restock",
                version: LogicVersion::V1,
            }
        ));

        // v3: withdraw exists, restock still does not.
        service.upgrade(OWNER, LogicVersion::V3).await.unwrap();
        assert!(matches!(
            service.restock(OWNER, 10).await.unwrap_err(),
            MachineError::Unsupported {
                operation: "restock",
                version: LogicVersion::V3,
            }
        ));
    }

    // =============================================================================
    // V3 SHIPPED FAULT AND V4 FIX
    // =============================================================================

    #[tokio::test]
    async fn test_v3_zero_profit_withdrawal_is_an_arithmetic_fault() {
        let service = service();
        service.upgrade(OWNER, LogicVersion::V3).await.unwrap();

        let err = service.withdraw(OWNER).await.unwrap_err();
        assert_eq!(err, MachineError::Arithmetic);
        assert!(!err.is_descriptive());

        // Nothing committed.
        assert!(service.profit().await.is_zero());
        assert_eq!(service.inventory().await, 100);
    }

    #[tokio::test]
    async fn test_v4_zero_profit_withdrawal_is_descriptive() {
        let service = service();
        service.upgrade(OWNER, LogicVersion::V4).await.unwrap();

        let err = service.withdraw(OWNER).await.unwrap_err();
        assert_eq!(err, MachineError::InsufficientProfit);
        assert_eq!(
            err.to_string(),
            "Profits must be greater than 0 in order to withdraw!"
        );
    }

    #[tokio::test]
    async fn test_v4_cooldown_enforced_across_clock_advances() {
        let clock = Arc::new(ManualClock::starting_at(1_000_000));
        let treasury = Arc::new(InMemoryTreasury::new());
        let service =
            VendingService::new(ServiceConfig::default(), OWNER, clock.clone(), treasury);
        service.upgrade(OWNER, LogicVersion::V4).await.unwrap();

        service.purchase(BUYER, wei(1000)).await.unwrap();
        service.withdraw(OWNER).await.unwrap();

        // One tenth of the cooldown is not enough, whatever the balance.
        clock.advance(60_480);
        let err = service.withdraw(OWNER).await.unwrap_err();
        assert_eq!(err.to_string(), "Withdrawal allowed once a week");

        // The full week is.
        clock.advance(params::WITHDRAWAL_COOLDOWN_SECS - 60_480);
        service.purchase(BUYER, wei(1000)).await.unwrap();
        let receipt = service.withdraw(OWNER).await.unwrap();
        assert_eq!(receipt.payout, wei(1000));
    }

    // =============================================================================
    // UPGRADE CONTROL
    // =============================================================================

    #[tokio::test]
    async fn test_only_the_owner_can_upgrade() {
        let service = service();
        let err = service.upgrade(BUYER, LogicVersion::V2).await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(service.active_version().await, LogicVersion::V1);
    }

    #[tokio::test]
    async fn test_downgrades_are_rejected_as_incompatible() {
        let service = service();
        service.upgrade(OWNER, LogicVersion::V4).await.unwrap();

        let err = service.upgrade(OWNER, LogicVersion::V2).await.unwrap_err();
        assert_eq!(
            err,
            MachineError::IncompatibleLayout {
                from: LogicVersion::V4,
                to: LogicVersion::V2,
            }
        );
        assert_eq!(service.active_version().await, LogicVersion::V4);
    }

    #[tokio::test]
    async fn test_versions_can_be_skipped() {
        let service = service();
        service.purchase(BUYER, wei(1000)).await.unwrap();

        // v1 -> v4 directly.
        service.upgrade(OWNER, LogicVersion::V4).await.unwrap();
        assert_eq!(service.active_version().await, LogicVersion::V4);
        assert_eq!(service.profit().await, wei(1000));

        // Everything v4 ships works immediately.
        service.withdraw(OWNER).await.unwrap();
        service.restock(OWNER, 1).await.unwrap();
        assert_eq!(service.inventory().await, 100);
    }

    #[tokio::test]
    async fn test_failed_upgrade_commits_nothing() {
        let service = service();
        service.upgrade(OWNER, LogicVersion::V3).await.unwrap();
        service.purchase(BUYER, wei(2000)).await.unwrap();

        let before_profit = service.profit().await;
        let before_inventory = service.inventory().await;

        service.upgrade(OWNER, LogicVersion::V1).await.unwrap_err();

        assert_eq!(service.active_version().await, LogicVersion::V3);
        assert_eq!(service.profit().await, before_profit);
        assert_eq!(service.inventory().await, before_inventory);
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_purchases_are_serialized() {
        let service = Arc::new(service());
        service.upgrade(OWNER, LogicVersion::V2).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.purchase(BUYER, wei(1000)).await
            }));
        }

        let mut dispensed = 0u64;
        for handle in handles {
            let receipt = timeout(Duration::from_secs(5), handle)
                .await
                .expect("timeout")
                .expect("join")
                .expect("purchase");
            dispensed += receipt.units;
        }

        // No lost updates through the single serialization point.
        assert_eq!(dispensed, 20);
        assert_eq!(service.inventory().await, 80);
        assert_eq!(service.profit().await, wei(20_000));
    }
}
