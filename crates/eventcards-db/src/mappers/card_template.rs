//! Card template model -> entity mapper

use eventcards_core::entities::CardTemplate;

use crate::models::CardTemplateModel;

impl From<CardTemplateModel> for CardTemplate {
    fn from(model: CardTemplateModel) -> Self {
        CardTemplate {
            id: model.id,
            image_path: model.image_path,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
