//! Card template service

use std::collections::HashMap;

use eventcards_core::entities::{CardTemplate, NewCardTemplate};
use eventcards_core::pagination::ListQuery;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateCardTemplateRequest, PaginatedResponse, UpdateCardTemplateRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Card template service
pub struct CardTemplateService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CardTemplateService<'a> {
    /// Create a new CardTemplateService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list_card_templates(
        &self,
        raw: &HashMap<String, String>,
    ) -> ServiceResult<PaginatedResponse<CardTemplate>> {
        let query = ListQuery::parse_and_validate(raw, self.ctx.list_defaults())?;
        let templates = self.ctx.card_templates().list((), &query).await?;
        Ok(PaginatedResponse::new(templates, &query))
    }

    #[instrument(skip(self))]
    pub async fn get_card_template(&self, template_id: i64) -> ServiceResult<CardTemplate> {
        Ok(self.ctx.card_templates().get_by_id(template_id).await?)
    }

    #[instrument(skip(self, request))]
    pub async fn create_card_template(
        &self,
        request: CreateCardTemplateRequest,
    ) -> ServiceResult<CardTemplate> {
        request.validate()?;

        let template = self
            .ctx
            .card_templates()
            .create(&NewCardTemplate::from(request))
            .await?;

        info!(template_id = template.id, "Card template created");
        Ok(template)
    }

    #[instrument(skip(self, request))]
    pub async fn update_card_template(
        &self,
        template_id: i64,
        request: UpdateCardTemplateRequest,
    ) -> ServiceResult<CardTemplate> {
        request.validate()?;

        let mut template = self.ctx.card_templates().get_by_id(template_id).await?;
        request.apply_to(&mut template);
        Ok(self.ctx.card_templates().update(&template).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_card_template(&self, template_id: i64) -> ServiceResult<()> {
        self.ctx.card_templates().delete(template_id).await?;
        info!(template_id, "Card template deleted");
        Ok(())
    }
}
