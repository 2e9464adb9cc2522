//! PostgreSQL implementation of InvitationWriter

use async_trait::async_trait;
use futures::FutureExt;
use tracing::{debug, instrument};

use eventcards_core::entities::{Card, Guest, NewCard, NewGuest};
use eventcards_core::traits::{InvitationWriter, RepoResult};

use crate::transaction::WriteCoordinator;

use super::pg_repository::{insert, select_by_id};

/// Issues a guest and their card in one transaction
#[derive(Clone)]
pub struct PgInvitationWriter {
    coordinator: WriteCoordinator,
}

impl PgInvitationWriter {
    pub fn new(coordinator: WriteCoordinator) -> Self {
        Self { coordinator }
    }
}

#[async_trait]
impl InvitationWriter for PgInvitationWriter {
    #[instrument(skip(self, guest, card), fields(event_id = guest.event_id))]
    async fn create_guest_with_card(
        &self,
        guest: &NewGuest,
        card: &NewCard,
    ) -> RepoResult<(Guest, Card)> {
        let guest = guest.clone();
        let card = card.clone();

        let (guest, card) = self
            .coordinator
            .run(move |tx| {
                async move {
                    let created = insert::<Guest>(tx.conn(), &guest).await?;

                    let card = NewCard {
                        event_id: created.event_id,
                        guest_id: Some(created.id),
                        ..card
                    };
                    // Inserting the card links the guest back to it
                    let issued = insert::<Card>(tx.conn(), &card).await?;

                    let linked = select_by_id::<Guest>(tx.conn(), created.id).await?;
                    Ok((linked, issued))
                }
                .boxed()
            })
            .await?;

        debug!(guest_id = guest.id, card_id = card.id, "Guest invited with card");
        Ok((guest, card))
    }
}
