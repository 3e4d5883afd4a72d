// src/application/commands/articles/update.rs
use super::{ArticleCommandService, SlugAvailability, ownership::ensure_article_author};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleChanges, UpdateArticle},
};

pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    /// A changed title gets a freshly generated slug; other edits keep it.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let input = UpdateArticle::parse(
            command.title.as_deref(),
            command.description.as_deref(),
            command.body.as_deref(),
        )?;

        let article = self.find_article(&command.slug).await?;
        ensure_article_author(actor, &article, "update")?;

        let mut changes = ArticleChanges::new(article.id, self.clock.now());
        if let Some(title) = input.title.as_deref().filter(|t| *t != article.title) {
            let availability = SlugAvailability::owned_by(self.read_repo.as_ref(), article.id);
            let slug = self.slugs.generate_slug(title, &availability).await?;
            changes = changes.with_slug(slug);
        }
        let changes = changes
            .with_title(input.title)
            .with_description(input.description)
            .with_body(input.body);

        let updated = self.write_repo.update(changes).await?;
        self.present(updated, actor.id).await
    }
}
