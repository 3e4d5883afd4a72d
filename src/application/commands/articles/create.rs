// src/application/commands/articles/create.rs
use super::{ArticleCommandService, SlugAvailability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{CreateArticle, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let input = CreateArticle::parse(
            &command.title,
            &command.description,
            &command.body,
            &command.tag_list,
        )?;

        let availability = SlugAvailability::new(self.read_repo.as_ref());
        let slug = self.slugs.generate_slug(&input.title, &availability).await?;

        let new_article = NewArticle {
            slug,
            title: input.title,
            description: input.description,
            body: input.body,
            tags: input.tags,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(slug = %created.slug, author_id = %actor.id, "article created");
        self.present(created, actor.id).await
    }
}
