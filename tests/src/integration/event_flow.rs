//! # Event Flow Tests
//!
//! Low-stock notices travelling from the machine service through the event
//! bus to subscribers: when the notices begin, per-operation
//! re-notification, emission order, and silence on failure.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use vendo_bus::{EventFilter, EventPublisher, EventTopic, MachineEvent, Subscription};
    use vendo_machine::prelude::*;

    const OWNER: AccountId = AccountId::new([0xAAu8; 20]);
    const BUYER: AccountId = AccountId::new([0xBBu8; 20]);

    async fn recv_notice(sub: &mut Subscription) -> LowStockNotice {
        let event = timeout(Duration::from_millis(500), sub.recv())
            .await
            .expect("timeout waiting for event")
            .expect("bus closed");
        let MachineEvent::LowStock(notice) = event;
        notice
    }

    async fn v4_service() -> VendingService<ManualClock, InMemoryTreasury> {
        let service = create_test_service(OWNER);
        service.upgrade(OWNER, LogicVersion::V4).await.unwrap();
        service
    }

    // =============================================================================
    // WHEN NOTICES BEGIN
    // =============================================================================

    #[tokio::test]
    async fn test_first_notice_comes_from_a_purchase_finding_the_threshold() {
        let service = v4_service().await;
        let bus = service.bus();
        let mut sub = bus.subscribe(EventFilter::topics(vec![EventTopic::Inventory]));

        // 91 purchases leave 9. None of them found stock at or below the
        // threshold, so all are silent, including the 10 -> 9 crossing.
        for _ in 0..91 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }
        assert_eq!(service.inventory().await, 9);
        assert!(sub.try_recv().unwrap().is_none());

        // The 92nd finds 9 on the shelf and notifies with that level.
        service.purchase(BUYER, wei(1000)).await.unwrap();
        let notice = recv_notice(&mut sub).await;
        assert_eq!(notice.owner, OWNER);
        assert_eq!(notice.inventory, 9);
        assert_eq!(service.inventory().await, 8);
    }

    #[tokio::test]
    async fn test_withdrawal_and_purchase_at_nine_each_notify_with_nine() {
        let service = v4_service().await;
        let bus = service.bus();
        let mut sub = bus.subscribe(EventFilter::all());

        for _ in 0..91 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }
        assert_eq!(service.inventory().await, 9);
        assert!(sub.try_recv().unwrap().is_none());

        // Both the next withdrawal and the next purchase observe 9 and
        // report it.
        service.withdraw(OWNER).await.unwrap();
        let notice = recv_notice(&mut sub).await;
        assert_eq!((notice.owner, notice.inventory), (OWNER, 9));

        service.purchase(BUYER, wei(1000)).await.unwrap();
        let notice = recv_notice(&mut sub).await;
        assert_eq!((notice.owner, notice.inventory), (OWNER, 9));

        // One notice per qualifying operation, no deduplication.
        assert_eq!(bus.events_published(), 2);
    }

    #[tokio::test]
    async fn test_restock_out_of_the_low_zone_silences_notices() {
        let service = v4_service().await;
        let bus = service.bus();
        let mut sub = bus.subscribe(EventFilter::all());

        for _ in 0..92 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }
        assert_eq!(recv_notice(&mut sub).await.inventory, 9);

        service.restock(OWNER, 92).await.unwrap();
        assert_eq!(service.inventory().await, 100);

        service.purchase(BUYER, wei(1000)).await.unwrap();
        assert!(sub.try_recv().unwrap().is_none());
    }

    // =============================================================================
    // EMISSION SEMANTICS
    // =============================================================================

    #[tokio::test]
    async fn test_notices_arrive_in_emission_order() {
        let service = v4_service().await;
        let bus = service.bus();
        let mut sub = bus.subscribe(EventFilter::all());

        for _ in 0..95 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }

        // Purchases 92..=95 found 9, 8, 7, 6.
        for expected in (6..=9).rev() {
            assert_eq!(recv_notice(&mut sub).await.inventory, expected);
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_operations_publish_in_commit_order() {
        let service = Arc::new(v4_service().await);
        let bus = service.bus();
        let mut sub = bus.subscribe(EventFilter::all());

        // Drain to the threshold; silent so far.
        for _ in 0..91 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }

        // Five concurrent low-zone purchases. Whatever order they commit
        // in, each notice carries the stock its purchase found, so the
        // received levels must be exactly 9, 8, 7, 6, 5 in that order.
        let mut handles = Vec::new();
        for _ in 0..5 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service.purchase(BUYER, wei(1000)).await
            }));
        }
        for handle in handles {
            handle.await.expect("join").expect("purchase");
        }

        for expected in (5..=9).rev() {
            assert_eq!(recv_notice(&mut sub).await.inventory, expected);
        }
        assert_eq!(service.inventory().await, 4);
    }

    #[tokio::test]
    async fn test_failed_operations_emit_nothing() {
        let service = v4_service().await;
        let bus = service.bus();
        let mut sub = bus.subscribe(EventFilter::all());

        // Drain into the low zone so any qualifying operation would notify.
        for _ in 0..92 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }
        assert_eq!(recv_notice(&mut sub).await.inventory, 9);

        // An underpaid purchase fails; no notice despite the low inventory.
        service.purchase(BUYER, wei(500)).await.unwrap_err();
        assert!(sub.try_recv().unwrap().is_none());
        assert_eq!(bus.events_published(), 1);
    }

    #[tokio::test]
    async fn test_versions_before_v4_never_notify() {
        let service = create_test_service(OWNER);
        service.upgrade(OWNER, LogicVersion::V2).await.unwrap();
        let bus = service.bus();
        let mut sub = bus.subscribe(EventFilter::all());

        // Drain the whole machine under v2: never a notice.
        service.purchase(BUYER, wei(100_000)).await.unwrap();
        assert_eq!(service.inventory().await, 0);

        assert!(sub.try_recv().unwrap().is_none());
        assert_eq!(bus.events_published(), 0);
    }

    #[tokio::test]
    async fn test_multiple_subscribers_each_receive_the_notice() {
        let service = v4_service().await;
        let bus = service.bus();
        let mut sub_a = bus.subscribe(EventFilter::all());
        let mut sub_b = bus.subscribe(EventFilter::topics(vec![EventTopic::Inventory]));

        for _ in 0..92 {
            service.purchase(BUYER, wei(1000)).await.unwrap();
        }

        assert_eq!(recv_notice(&mut sub_a).await.inventory, 9);
        assert_eq!(recv_notice(&mut sub_b).await.inventory, 9);
    }
}
