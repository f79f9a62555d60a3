//! PostgreSQL Repository Implementation
//!
//! Profiles are rows with the embedded parts (`social`, `experience`) kept
//! as JSONB documents.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::experience::Experience;
use crate::domain::entity::owner::Owner;
use crate::domain::entity::profile::{Profile, ProfileView};
use crate::domain::entity::profile_patch::ProfilePatch;
use crate::domain::repository::{DeleteOutcome, ProfileRepository};
use crate::domain::value_object::UserId;
use crate::domain::value_object::social::Social;
use crate::error::ProfileResult;

/// PostgreSQL-backed profile repository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PROFILE_COLUMNS: &str = r#"
    p.profile_id,
    p.user_id,
    p.company,
    p.website,
    p.location,
    p.bio,
    p.status,
    p.githubusername,
    p.skills,
    p.social,
    p.experience,
    p.created_at,
    p.updated_at
"#;

const OWNER_COLUMNS: &str = r#"
    u.user_id AS owner_id,
    u.name AS owner_name,
    u.avatar AS owner_avatar
"#;

impl ProfileRepository for PgProfileRepository {
    async fn find_by_user(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profiles p WHERE p.user_id = $1");
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn find_view_by_user(&self, user_id: &UserId) -> ProfileResult<Option<ProfileView>> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS}, {OWNER_COLUMNS}
             FROM profiles p
             LEFT JOIN users u ON u.user_id = p.user_id
             WHERE p.user_id = $1"
        );
        let row = sqlx::query_as::<_, ProfileViewRow>(&sql)
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProfileViewRow::into_view))
    }

    async fn list_views(&self) -> ProfileResult<Vec<ProfileView>> {
        let sql = format!(
            "SELECT {PROFILE_COLUMNS}, {OWNER_COLUMNS}
             FROM profiles p
             LEFT JOIN users u ON u.user_id = p.user_id"
        );
        let rows = sqlx::query_as::<_, ProfileViewRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProfileViewRow::into_view).collect())
    }

    async fn create(&self, profile: &Profile) -> ProfileResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                profile_id,
                user_id,
                company,
                website,
                location,
                bio,
                status,
                githubusername,
                skills,
                social,
                experience,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(profile.profile_id.as_uuid())
        .bind(profile.user_id.as_uuid())
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.status)
        .bind(&profile.githubusername)
        .bind(&profile.skills)
        .bind(Json(&profile.social))
        .bind(Json(&profile.experience))
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn apply_patch(
        &self,
        user_id: &UserId,
        patch: &ProfilePatch,
    ) -> ProfileResult<Option<Profile>> {
        // NULL binds mean "not supplied" and keep the stored value.
        let sql = format!(
            r#"
            UPDATE profiles p SET
                company = COALESCE($2, p.company),
                website = COALESCE($3, p.website),
                location = COALESCE($4, p.location),
                bio = COALESCE($5, p.bio),
                status = COALESCE($6, p.status),
                githubusername = COALESCE($7, p.githubusername),
                skills = COALESCE($8, p.skills),
                social = COALESCE(p.social, '{{}}'::jsonb) || $9,
                updated_at = $10
            WHERE p.user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ProfileRow>(&sql)
            .bind(user_id.as_uuid())
            .bind(patch.company.as_str())
            .bind(patch.website.as_str())
            .bind(patch.location.as_str())
            .bind(patch.bio.as_str())
            .bind(patch.status.as_str())
            .bind(patch.githubusername.as_str())
            .bind(patch.skills.as_set().map(|skills| skills.as_slice().to_vec()))
            .bind(Json(patch.social.to_json_object()))
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn save_experience(&self, profile: &Profile) -> ProfileResult<()> {
        sqlx::query(
            r#"
            UPDATE profiles SET
                experience = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(profile.user_id.as_uuid())
        .bind(Json(&profile.experience))
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_with_user(&self, user_id: &UserId) -> ProfileResult<DeleteOutcome> {
        let mut tx = self.pool.begin().await?;

        let profiles_deleted = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let users_deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(DeleteOutcome {
            profiles_deleted,
            users_deleted,
        })
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: Uuid,
    user_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    bio: Option<String>,
    status: Option<String>,
    githubusername: Option<String>,
    skills: Vec<String>,
    social: Json<Social>,
    experience: Json<Vec<Experience>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            profile_id: self.profile_id.into(),
            user_id: self.user_id.into(),
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            githubusername: self.githubusername,
            skills: self.skills,
            social: self.social.0,
            experience: self.experience.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileViewRow {
    #[sqlx(flatten)]
    profile: ProfileRow,
    owner_id: Option<Uuid>,
    owner_name: Option<String>,
    owner_avatar: Option<String>,
}

impl ProfileViewRow {
    fn into_view(self) -> ProfileView {
        let owner = match (self.owner_id, self.owner_name) {
            (Some(user_id), Some(name)) => Some(Owner {
                user_id: user_id.into(),
                name,
                avatar: self.owner_avatar,
            }),
            _ => None,
        };

        ProfileView {
            profile: self.profile.into_profile(),
            owner,
        }
    }
}

// Run with `DATABASE_URL` set: `cargo test -p profile -- --ignored`
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::experience::NewExperience;
    use crate::domain::value_object::field::Field;
    use crate::domain::value_object::skills::Skills;
    use crate::domain::value_object::social::SocialPatch;

    async fn insert_user(pool: &PgPool, name: &str) -> UserId {
        let user_id = UserId::new();
        sqlx::query("INSERT INTO users (user_id, name, email) VALUES ($1, $2, $3)")
            .bind(user_id.as_uuid())
            .bind(name)
            .bind(format!("{name}@example.com"))
            .execute(pool)
            .await
            .unwrap();
        user_id
    }

    fn initial_patch() -> ProfilePatch {
        ProfilePatch {
            company: Field::Set("Acme".to_string()),
            status: Field::Set("Developer".to_string()),
            skills: Field::Set(Skills::parse("Rust, SQL")),
            social: SocialPatch {
                twitter: Field::Set("https://twitter.com/alice".to_string()),
                ..SocialPatch::default()
            },
            ..ProfilePatch::default()
        }
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_apply_patch_keeps_unsupplied_fields(pool: PgPool) {
        let repo = PgProfileRepository::new(pool.clone());
        let user_id = insert_user(&pool, "alice").await;
        repo.create(&Profile::create(user_id, &initial_patch()))
            .await
            .unwrap();

        let patch = ProfilePatch {
            bio: Field::Set("Hello".to_string()),
            social: SocialPatch {
                youtube: Field::Set("https://youtube.com/alice".to_string()),
                ..SocialPatch::default()
            },
            ..ProfilePatch::default()
        };
        let updated = repo.apply_patch(&user_id, &patch).await.unwrap().unwrap();

        assert_eq!(updated.company.as_deref(), Some("Acme"));
        assert_eq!(updated.bio.as_deref(), Some("Hello"));
        assert_eq!(updated.skills, vec!["Rust", "SQL"]);
        assert_eq!(
            updated.social.twitter.as_deref(),
            Some("https://twitter.com/alice")
        );
        assert_eq!(
            updated.social.youtube.as_deref(),
            Some("https://youtube.com/alice")
        );

        let view = repo.find_view_by_user(&user_id).await.unwrap().unwrap();
        assert_eq!(view.owner.map(|o| o.name).as_deref(), Some("alice"));

        assert!(repo.apply_patch(&UserId::new(), &patch).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_second_create_for_user_fails(pool: PgPool) {
        let repo = PgProfileRepository::new(pool.clone());
        let user_id = insert_user(&pool, "alice").await;

        repo.create(&Profile::create(user_id, &initial_patch()))
            .await
            .unwrap();
        assert!(
            repo.create(&Profile::create(user_id, &initial_patch()))
                .await
                .is_err()
        );
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_save_experience_persists_order(pool: PgPool) {
        let repo = PgProfileRepository::new(pool.clone());
        let user_id = insert_user(&pool, "alice").await;
        let mut profile = Profile::create(user_id, &initial_patch());
        repo.create(&profile).await.unwrap();

        for title in ["E1", "E2"] {
            profile.add_experience(Experience::new(
                NewExperience {
                    title: title.to_string(),
                    company: "Acme".to_string(),
                    location: None,
                    from: Utc::now(),
                    to: None,
                    current: false,
                    description: None,
                },
            ));
        }
        repo.save_experience(&profile).await.unwrap();

        let stored = repo.find_by_user(&user_id).await.unwrap().unwrap();
        let titles: Vec<_> = stored.experience.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["E2", "E1"]);
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires DATABASE_URL"]
    async fn test_delete_with_user_removes_both(pool: PgPool) {
        let repo = PgProfileRepository::new(pool.clone());
        let user_id = insert_user(&pool, "alice").await;
        repo.create(&Profile::create(user_id, &initial_patch()))
            .await
            .unwrap();

        let outcome = repo.delete_with_user(&user_id).await.unwrap();
        assert_eq!(outcome.profiles_deleted, 1);
        assert_eq!(outcome.users_deleted, 1);
        assert!(repo.find_by_user(&user_id).await.unwrap().is_none());

        let outcome = repo.delete_with_user(&user_id).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::default());
    }
}
