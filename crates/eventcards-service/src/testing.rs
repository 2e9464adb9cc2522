//! In-memory storage fakes for service tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use eventcards_core::entities::{
    Card, CardSummary, CardTemplate, Event, EventSummary, Guest, GuestSummary, NewCard,
    NewCardTemplate, NewEvent, NewGuest,
};
use eventcards_core::pagination::ListQuery;
use eventcards_core::traits::{
    Entity, InvitationWriter, RepoResult, Repository, Storage, UserCache,
};
use eventcards_core::DomainError;
use tokio::sync::RwLock;

use crate::services::ServiceContext;

/// How a fake row is created, listed and searched
pub trait FakeRecord: Entity {
    fn from_draft(id: i64, draft: &Self::Draft, now: DateTime<Utc>) -> Self;
    fn summary(&self) -> Self::Summary;
    fn in_scope(&self, scope: Self::Scope) -> bool;
    /// `term` is already lowercased
    fn matches(&self, term: &str) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn touch(&mut self, now: DateTime<Utc>);
}

fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}

impl FakeRecord for Event {
    fn from_draft(id: i64, draft: &NewEvent, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            date: draft.date,
            location: draft.location.clone(),
            scanned_count: 0,
            card_template_id: draft.card_template_id,
            user_id: draft.user_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn summary(&self) -> EventSummary {
        EventSummary::from(self)
    }

    fn in_scope(&self, (): ()) -> bool {
        true
    }

    fn matches(&self, term: &str) -> bool {
        contains(&self.name, term) || contains(&self.location, term)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl FakeRecord for Guest {
    fn from_draft(id: i64, draft: &NewGuest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            status: draft.status,
            guest_type: draft.guest_type,
            card_id: None,
            event_id: draft.event_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn summary(&self) -> GuestSummary {
        GuestSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            status: self.status,
            guest_type: self.guest_type,
            event_id: self.event_id,
            created_at: self.created_at,
            card: None,
        }
    }

    fn in_scope(&self, event_id: i64) -> bool {
        self.event_id == event_id
    }

    fn matches(&self, term: &str) -> bool {
        contains(&self.name, term)
            || contains(&self.phone_number, term)
            || contains(&self.email, term)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl FakeRecord for Card {
    fn from_draft(id: i64, draft: &NewCard, now: DateTime<Utc>) -> Self {
        Self {
            id,
            image_path: draft.image_path.clone(),
            event_id: draft.event_id,
            guest_id: draft.guest_id,
            card_template_id: draft.card_template_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn summary(&self) -> CardSummary {
        CardSummary {
            id: self.id,
            image_path: self.image_path.clone(),
            event_id: self.event_id,
            created_at: self.created_at,
            guest: None,
        }
    }

    fn in_scope(&self, (): ()) -> bool {
        true
    }

    // No guest join in memory
    fn matches(&self, term: &str) -> bool {
        contains(&self.image_path, term)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl FakeRecord for CardTemplate {
    fn from_draft(id: i64, draft: &NewCardTemplate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            image_path: draft.image_path.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    fn summary(&self) -> CardTemplate {
        self.clone()
    }

    fn in_scope(&self, (): ()) -> bool {
        true
    }

    fn matches(&self, term: &str) -> bool {
        contains(&self.image_path, term)
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// Repository backed by a map keyed by id
pub struct InMemoryRepository<E: FakeRecord> {
    rows: Arc<RwLock<BTreeMap<i64, E>>>,
    next_id: AtomicI64,
}

impl<E: FakeRecord> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E: FakeRecord> InMemoryRepository<E> {
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    async fn remove(&self, id: i64) {
        self.rows.write().await.remove(&id);
    }
}

#[async_trait]
impl<E: FakeRecord> Repository<E> for InMemoryRepository<E> {
    async fn get_by_id(&self, id: i64) -> RepoResult<E> {
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(E::NAME, id))
    }

    async fn list(&self, scope: E::Scope, query: &ListQuery) -> RepoResult<Vec<E::Summary>> {
        let term = query.search.to_lowercase();
        let rows = self.rows.read().await;

        let mut matched: Vec<&E> = rows
            .values()
            .filter(|row| row.in_scope(scope))
            .filter(|row| term.is_empty() || row.matches(&term))
            .collect();
        matched.sort_by_key(|row| (row.created_at(), row.id()));
        if !query.sort.is_ascending() {
            matched.reverse();
        }

        let offset = usize::try_from(query.offset).unwrap_or(0);
        let limit = usize::try_from(query.limit).unwrap_or(0);
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|row| row.summary())
            .collect())
    }

    async fn create(&self, draft: &E::Draft) -> RepoResult<E> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let row = E::from_draft(id, draft, Utc::now());
        self.rows.write().await.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, entity: &E) -> RepoResult<E> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .get_mut(&entity.id())
            .ok_or_else(|| DomainError::not_found(E::NAME, entity.id()))?;
        let mut updated = entity.clone();
        updated.touch(Utc::now());
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.rows
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(E::NAME, id))
    }
}

/// Guest-plus-card writer over the in-memory repositories
pub struct InMemoryInvitationWriter {
    guests: Arc<InMemoryRepository<Guest>>,
    cards: Arc<InMemoryRepository<Card>>,
    fail_card_insert: bool,
}

#[async_trait]
impl InvitationWriter for InMemoryInvitationWriter {
    async fn create_guest_with_card(
        &self,
        guest: &NewGuest,
        card: &NewCard,
    ) -> RepoResult<(Guest, Card)> {
        let mut created_guest = self.guests.create(guest).await?;

        if self.fail_card_insert {
            // Undo the guest insert the way a rollback would
            self.guests.remove(created_guest.id).await;
            return Err(DomainError::InvalidReference(
                "card_template_id does not exist".to_string(),
            ));
        }

        let draft = NewCard {
            event_id: created_guest.event_id,
            guest_id: Some(created_guest.id),
            ..card.clone()
        };
        let created_card = self.cards.create(&draft).await?;

        created_guest.card_id = Some(created_card.id);
        let created_guest = self.guests.update(&created_guest).await?;
        Ok((created_guest, created_card))
    }
}

/// User cache that records invalidations, optionally failing every call
#[derive(Default)]
pub struct RecordingUserCache {
    pub invalidated: Mutex<Vec<i64>>,
    pub fail: bool,
}

impl RecordingUserCache {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn invalidated(&self) -> Vec<i64> {
        self.invalidated.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserCache for RecordingUserCache {
    async fn invalidate_user(&self, user_id: i64) -> RepoResult<()> {
        self.invalidated.lock().unwrap().push(user_id);
        if self.fail {
            return Err(DomainError::CacheError("connection refused".to_string()));
        }
        Ok(())
    }
}

/// In-memory repositories plus the cache, with handles kept for assertions
pub struct FakeStore {
    pub events: Arc<InMemoryRepository<Event>>,
    pub guests: Arc<InMemoryRepository<Guest>>,
    pub cards: Arc<InMemoryRepository<Card>>,
    pub card_templates: Arc<InMemoryRepository<CardTemplate>>,
    pub cache: Arc<RecordingUserCache>,
    fail_card_insert: bool,
}

impl Default for FakeStore {
    fn default() -> Self {
        Self::with_cache(RecordingUserCache::default())
    }
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: RecordingUserCache) -> Self {
        Self {
            events: Arc::default(),
            guests: Arc::default(),
            cards: Arc::default(),
            card_templates: Arc::default(),
            cache: Arc::new(cache),
            fail_card_insert: false,
        }
    }

    /// Make the composite guest-plus-card write fail on the card insert
    pub fn failing_card_insert(mut self) -> Self {
        self.fail_card_insert = true;
        self
    }

    pub fn storage(&self) -> Storage {
        Storage {
            events: self.events.clone(),
            guests: self.guests.clone(),
            cards: self.cards.clone(),
            card_templates: self.card_templates.clone(),
            invitations: Arc::new(InMemoryInvitationWriter {
                guests: self.guests.clone(),
                cards: self.cards.clone(),
                fail_card_insert: self.fail_card_insert,
            }),
        }
    }

    pub fn context(&self) -> ServiceContext {
        ServiceContext::new(self.storage(), self.cache.clone())
    }
}
