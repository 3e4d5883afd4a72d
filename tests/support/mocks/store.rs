// tests/support/mocks/store.rs
//! One in-memory database behind every repository trait, so that views can
//! see users, follows and favorites the way the SQL joins do.
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use conduit_core::domain::article::{
    Article, ArticleChanges, ArticleFilter, ArticleId, ArticlePage, ArticleReadRepository,
    ArticleView, ArticleWriteRepository, NewArticle, Slug, TagRepository,
};
use conduit_core::domain::comment::{
    Comment, CommentId, CommentRepository, CommentView, NewComment,
};
use conduit_core::domain::errors::{DomainError, DomainResult};
use conduit_core::domain::user::{
    Email, NewUser, Profile, User, UserChanges, UserId, UserRepository, Username,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    follows: HashSet<(UserId, UserId)>,
    articles: Vec<Article>,
    favorites: HashSet<(UserId, ArticleId)>,
    comments: Vec<Comment>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn user(&self, id: UserId) -> DomainResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    fn profile(&self, id: UserId, viewer: Option<UserId>) -> DomainResult<Profile> {
        let user = self.user(id)?;
        let following = viewer.is_some_and(|viewer| self.follows.contains(&(viewer, id)));
        Ok(user.profile(following))
    }

    fn article_view(&self, article: Article, viewer: Option<UserId>) -> DomainResult<ArticleView> {
        let author = self.profile(article.author_id, viewer)?;
        let favorited =
            viewer.is_some_and(|viewer| self.favorites.contains(&(viewer, article.id)));
        let favorites_count = self
            .favorites
            .iter()
            .filter(|(_, id)| *id == article.id)
            .count() as i64;
        Ok(ArticleView {
            article,
            author,
            favorited,
            favorites_count,
        })
    }

    fn username_of(&self, id: UserId) -> Option<&str> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.username.as_str())
    }

    fn page(
        &self,
        matches: impl Fn(&Article) -> bool,
        viewer: Option<UserId>,
        limit: i64,
        offset: i64,
    ) -> DomainResult<ArticlePage> {
        let mut selected: Vec<&Article> = self.articles.iter().filter(|a| matches(a)).collect();
        selected.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        let total = selected.len() as i64;
        let articles = selected
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|a| self.article_view(a.clone(), viewer))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(ArticlePage { articles, total })
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    broken: AtomicBool,
    slug_checks: AtomicUsize,
}

impl InMemoryStore {
    /// Every later call fails with a persistence error.
    pub fn break_storage(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    /// Reserves a slug as if another article already used it.
    pub fn occupy_slug(&self, slug: &str, author: UserId) {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.articles.push(Article {
            id: ArticleId(id),
            slug: Slug::from_stored(slug).unwrap(),
            title: slug.into(),
            description: "taken".into(),
            body: "taken".into(),
            tags: Vec::new(),
            author_id: author,
            created_at: super::fixed_now(),
            updated_at: super::fixed_now(),
        });
    }

    pub fn article_count(&self) -> usize {
        self.tables.lock().unwrap().articles.len()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    pub fn stored_password_hash(&self, id: UserId) -> Option<String> {
        let tables = self.tables.lock().unwrap();
        tables
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.password_hash.as_str().to_string())
    }

    /// How many times a slug was probed for uniqueness.
    pub fn slug_checks(&self) -> usize {
        self.slug_checks.load(Ordering::SeqCst)
    }

    fn open(&self) -> DomainResult<MutexGuard<'_, Tables>> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("storage offline".into()));
        }
        Ok(self.tables.lock().unwrap())
    }
}

fn check_unique_user(
    tables: &Tables,
    email: Option<&Email>,
    username: Option<&Username>,
    except: Option<UserId>,
) -> DomainResult<()> {
    let others = tables.users.iter().filter(|u| Some(u.id) != except);
    for user in others {
        if username.is_some_and(|name| user.username == *name) {
            return Err(DomainError::UsernameAlreadyExists);
        }
        if email.is_some_and(|email| user.email == *email) {
            return Err(DomainError::EmailAlreadyExists);
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut tables = self.open()?;
        check_unique_user(&tables, Some(&new_user.email), Some(&new_user.username), None)?;
        let id = tables.next_id();
        let user = User {
            id: UserId(id),
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            bio: None,
            image: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let tables = self.open()?;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let tables = self.open()?;
        Ok(tables.users.iter().find(|u| u.email == *email).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.open()?;
        Ok(tables.users.iter().find(|u| u.username == *username).cloned())
    }

    async fn update(&self, changes: UserChanges) -> DomainResult<User> {
        let mut tables = self.open()?;
        check_unique_user(
            &tables,
            changes.email.as_ref(),
            changes.username.as_ref(),
            Some(changes.id),
        )?;
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == changes.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(bio) = changes.bio {
            user.bio = Some(bio);
        }
        if let Some(image) = changes.image {
            user.image = Some(image);
        }
        user.updated_at = changes.updated_at;
        Ok(user.clone())
    }

    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.open()?.follows.insert((follower, followee));
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()> {
        self.open()?.follows.remove(&(follower, followee));
        Ok(())
    }

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool> {
        Ok(self.open()?.follows.contains(&(follower, followee)))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tables = self.open()?;
        if tables.articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = tables.next_id();
        let created = Article {
            id: ArticleId(id),
            slug: article.slug,
            title: article.title,
            description: article.description,
            body: article.body,
            tags: article.tags,
            author_id: article.author_id,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        tables.articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, changes: ArticleChanges) -> DomainResult<Article> {
        let mut tables = self.open()?;
        if let Some(slug) = &changes.slug {
            if tables
                .articles
                .iter()
                .any(|a| a.slug == *slug && a.id != changes.id)
            {
                return Err(DomainError::Conflict("slug already exists".into()));
            }
        }
        let article = tables
            .articles
            .iter_mut()
            .find(|a| a.id == changes.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(slug) = changes.slug {
            article.slug = slug;
        }
        if let Some(title) = changes.title {
            article.title = title;
        }
        if let Some(description) = changes.description {
            article.description = description;
        }
        if let Some(body) = changes.body {
            article.body = body;
        }
        article.updated_at = changes.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.open()?;
        let before = tables.articles.len();
        tables.articles.retain(|a| a.id != id);
        if tables.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        tables.comments.retain(|c| c.article_id != id);
        tables.favorites.retain(|(_, article)| *article != id);
        Ok(())
    }

    async fn favorite(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        self.open()?.favorites.insert((user, article));
        Ok(())
    }

    async fn unfavorite(&self, user: UserId, article: ArticleId) -> DomainResult<()> {
        self.open()?.favorites.remove(&(user, article));
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Article>> {
        let tables = self.open()?;
        Ok(tables.articles.iter().find(|a| a.slug.as_str() == slug).cloned())
    }

    async fn slug_exists(&self, slug: &Slug) -> DomainResult<bool> {
        self.slug_checks.fetch_add(1, Ordering::SeqCst);
        let tables = self.open()?;
        Ok(tables.articles.iter().any(|a| a.slug == *slug))
    }

    async fn view(&self, article: Article, viewer: Option<UserId>) -> DomainResult<ArticleView> {
        self.open()?.article_view(article, viewer)
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        viewer: Option<UserId>,
    ) -> DomainResult<ArticlePage> {
        let tables = self.open()?;
        let matches = |article: &Article| {
            let tag_ok = filter
                .tag
                .as_ref()
                .is_none_or(|tag| article.tags.contains(tag));
            let author_ok = filter
                .author
                .as_deref()
                .is_none_or(|author| tables.username_of(article.author_id) == Some(author));
            let favorited_ok = filter.favorited_by.as_deref().is_none_or(|name| {
                tables
                    .favorites
                    .iter()
                    .any(|(user, id)| *id == article.id && tables.username_of(*user) == Some(name))
            });
            tag_ok && author_ok && favorited_ok
        };
        tables.page(matches, viewer, filter.limit, filter.offset)
    }

    async fn feed(&self, viewer: UserId, limit: i64, offset: i64) -> DomainResult<ArticlePage> {
        let tables = self.open()?;
        let matches = |article: &Article| tables.follows.contains(&(viewer, article.author_id));
        tables.page(matches, Some(viewer), limit, offset)
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<String>> {
        let tables = self.open()?;
        let mut tags: Vec<String> = tables
            .articles
            .iter()
            .flat_map(|a| a.tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.open()?;
        if !tables.articles.iter().any(|a| a.id == comment.article_id) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        let id = tables.next_id();
        let created = Comment {
            id: CommentId(id),
            article_id: comment.article_id,
            author_id: comment.author_id,
            body: comment.body,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let tables = self.open()?;
        Ok(tables.comments.iter().find(|c| c.id == id).cloned())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut tables = self.open()?;
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        if tables.comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn view(&self, comment: Comment, viewer: Option<UserId>) -> DomainResult<CommentView> {
        let tables = self.open()?;
        let author = tables.profile(comment.author_id, viewer)?;
        Ok(CommentView { comment, author })
    }

    async fn list_for_article(
        &self,
        article: ArticleId,
        viewer: Option<UserId>,
    ) -> DomainResult<Vec<CommentView>> {
        let tables = self.open()?;
        let mut comments: Vec<&Comment> = tables
            .comments
            .iter()
            .filter(|c| c.article_id == article)
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id.0));
        comments
            .into_iter()
            .map(|c| {
                Ok(CommentView {
                    comment: c.clone(),
                    author: tables.profile(c.author_id, viewer)?,
                })
            })
            .collect()
    }
}
