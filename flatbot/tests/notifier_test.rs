//! Integration tests for [`flatbot::Notifier`].
//!
//! Covers first-time delivery, URL dedup across repeated checks, transient
//! send rejection, and ledger eviction when the chat turns unreachable.

use std::sync::Arc;
use storage::{DeliveryLedger, EntryCategory, InMemoryStore};

use flatbot::notifier::CHECK_STATUS_TEXT;
use flatbot::{Chat, Listing, Notifier};

mod common;
use common::mock_bot::MockBot;

const FL1_URL: &str = "https://anflat.ru/rent/apartments/object-FL1";
const FL2_URL: &str = "https://anflat.ru/rent/apartments/object-FL2";

fn listing(id: &str, url: &str) -> Listing {
    Listing {
        id: id.to_string(),
        url: url.to_string(),
    }
}

fn setup() -> (Arc<MockBot>, DeliveryLedger, Notifier, Chat) {
    let bot = Arc::new(MockBot::new());
    let ledger = DeliveryLedger::new(Arc::new(InMemoryStore::new()));
    let notifier = Notifier::new(bot.clone(), ledger.clone());
    (bot, ledger, notifier, Chat::new(42))
}

/// **Test: A fresh listing is sent and recorded exactly once.**
///
/// **Setup:** Empty ledger; one listing (FL1).
/// **Action:** `notify(chat, [FL1])`.
/// **Expected:** Status + listing message sent; LISTING_URL holds exactly one
/// entry mapping the sent message id to the URL.
#[tokio::test]
async fn test_notify_sends_new_listing_once() {
    let (bot, ledger, notifier, chat) = setup();

    let report = notifier
        .notify(&chat, &[listing("FL1", FL1_URL)])
        .await
        .expect("notify");

    assert_eq!(report.sent, 1);
    assert_eq!(report.duplicates, 0);
    assert!(!report.user_evicted);

    assert_eq!(
        bot.sent_texts(),
        vec![CHECK_STATUS_TEXT.to_string(), FL1_URL.to_string()]
    );

    let urls = ledger
        .entries("42", EntryCategory::ListingUrl)
        .await
        .expect("entries");
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].1, FL1_URL);

    let status = ledger
        .entries("42", EntryCategory::Other)
        .await
        .expect("entries");
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].1, CHECK_STATUS_TEXT);
}

/// **Test: A repeated check resends only the status message.**
///
/// **Setup:** `notify` already ran once for the same single listing.
/// **Action:** `notify(chat, [FL1])` again.
/// **Expected:** Second pass sends zero listing messages; ledger still holds
/// one LISTING_URL entry.
#[tokio::test]
async fn test_notify_is_idempotent_per_url() {
    let (bot, ledger, notifier, chat) = setup();
    let batch = [listing("FL1", FL1_URL)];

    notifier.notify(&chat, &batch).await.expect("first notify");
    let report = notifier.notify(&chat, &batch).await.expect("second notify");

    assert_eq!(report.sent, 0);
    assert_eq!(report.duplicates, 1);

    let listing_sends = bot
        .sent_texts()
        .into_iter()
        .filter(|t| t == FL1_URL)
        .count();
    assert_eq!(listing_sends, 1);

    let urls = ledger
        .entries("42", EntryCategory::ListingUrl)
        .await
        .expect("entries");
    assert_eq!(urls.len(), 1);
}

/// **Test: An unreachable chat at the status send evicts the whole ledger.**
///
/// **Setup:** Ledger pre-seeded from an earlier check; bot reports the chat
/// blocked.
/// **Action:** `notify(chat, [FL2])`.
/// **Expected:** Returns Ok with `user_evicted`; no listing sends; the user
/// is gone from the ledger.
#[tokio::test]
async fn test_notify_unreachable_status_evicts_user() {
    let (bot, ledger, notifier, chat) = setup();

    notifier
        .notify(&chat, &[listing("FL1", FL1_URL)])
        .await
        .expect("seed notify");

    bot.set_unreachable();
    let report = notifier
        .notify(&chat, &[listing("FL2", FL2_URL)])
        .await
        .expect("notify must not raise");

    assert!(report.user_evicted);
    assert_eq!(report.sent, 0);
    assert!(ledger.users().await.expect("users").is_empty());
    assert!(!bot.sent_texts().contains(&FL2_URL.to_string()));
}

/// **Test: An unreachable chat mid-batch aborts the rest and evicts.**
///
/// **Setup:** Two fresh listings; the chat turns unreachable after the status
/// and first listing have gone out.
/// **Action:** `notify(chat, [FL1, FL2])`.
/// **Expected:** One listing sent, then eviction; FL2 never sent; ledger gone.
#[tokio::test]
async fn test_notify_unreachable_mid_batch_aborts() {
    let (bot, ledger, notifier, chat) = setup();
    bot.set_unreachable_after(2);

    let report = notifier
        .notify(&chat, &[listing("FL1", FL1_URL), listing("FL2", FL2_URL)])
        .await
        .expect("notify must not raise");

    assert_eq!(report.sent, 1);
    assert!(report.user_evicted);
    assert!(!bot.sent_texts().contains(&FL2_URL.to_string()));
    assert!(ledger.users().await.expect("users").is_empty());
}

/// **Test: A rejected listing send is skipped without retry or record.**
///
/// **Setup:** Two fresh listings; the platform rejects the first URL payload.
/// **Action:** `notify(chat, [FL1, FL2])`.
/// **Expected:** FL2 sent and recorded; FL1 absent from the ledger; no error.
#[tokio::test]
async fn test_notify_rejected_send_is_skipped() {
    let (bot, ledger, notifier, chat) = setup();
    bot.reject_text(FL1_URL);

    let report = notifier
        .notify(&chat, &[listing("FL1", FL1_URL), listing("FL2", FL2_URL)])
        .await
        .expect("notify");

    assert_eq!(report.sent, 1);
    assert!(bot.sent_texts().contains(&FL2_URL.to_string()));

    let urls: Vec<String> = ledger
        .entries("42", EntryCategory::ListingUrl)
        .await
        .expect("entries")
        .into_iter()
        .map(|(_, url)| url)
        .collect();
    assert_eq!(urls, vec![FL2_URL.to_string()]);
}
