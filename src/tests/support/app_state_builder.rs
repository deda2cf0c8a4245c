use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::{
    GetProfileUseCase, LoginUserUseCase, RegisterUserUseCase, RequestPasswordResetUseCase,
    ResendOtpUseCase, ResetPasswordUseCase, UpdateNotificationSettingsUseCase,
    UpdateProfileUseCase, VerifyOtpUseCase,
};
use crate::media::application::domain::policies::UploadPolicy;
use crate::modules::comment::application::comment_use_cases::CommentUseCases;
use crate::modules::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase, ToggleCommentLikeUseCase,
};
use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, EditPostUseCase, ListPostsUseCase,
    TogglePostLikeUseCase,
};
use crate::modules::post::application::post_use_cases::PostUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case starts as a stub that panics when called; tests swap in
/// the ones they exercise.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    post: PostUseCases,
    comment: CommentUseCases,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                verify_otp: Arc::new(StubVerifyOtpUseCase),
                resend_otp: Arc::new(StubResendOtpUseCase),
                login: Arc::new(StubLoginUserUseCase),
                request_password_reset: Arc::new(StubRequestPasswordResetUseCase),
                reset_password: Arc::new(StubResetPasswordUseCase),
                get_profile: Arc::new(StubGetProfileUseCase),
                update_profile: Arc::new(StubUpdateProfileUseCase),
                update_notifications: Arc::new(StubUpdateNotificationSettingsUseCase),
            },
            post: PostUseCases {
                create: Arc::new(StubCreatePostUseCase),
                edit: Arc::new(StubEditPostUseCase),
                delete: Arc::new(StubDeletePostUseCase),
                toggle_like: Arc::new(StubTogglePostLikeUseCase),
                list: Arc::new(EmptyListPostsUseCase),
            },
            comment: CommentUseCases {
                add: Arc::new(StubAddCommentUseCase),
                delete: Arc::new(StubDeleteCommentUseCase),
                toggle_like: Arc::new(StubToggleCommentLikeUseCase),
                list: Arc::new(StubListCommentsUseCase),
            },
            upload_policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    // ── auth ──────────────────────────────────────────────

    pub fn with_register(mut self, uc: impl RegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_verify_otp(mut self, uc: impl VerifyOtpUseCase + Send + Sync + 'static) -> Self {
        self.auth.verify_otp = Arc::new(uc);
        self
    }

    pub fn with_resend_otp(mut self, uc: impl ResendOtpUseCase + Send + Sync + 'static) -> Self {
        self.auth.resend_otp = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl RequestPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.request_password_reset = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl ResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.reset_password = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.auth.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_update_notifications(
        mut self,
        uc: impl UpdateNotificationSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_notifications = Arc::new(uc);
        self
    }

    // ── posts ─────────────────────────────────────────────

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_edit_post(mut self, uc: impl EditPostUseCase + Send + Sync + 'static) -> Self {
        self.post.edit = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + Send + Sync + 'static) -> Self {
        self.post.delete = Arc::new(uc);
        self
    }

    pub fn with_toggle_post_like(
        mut self,
        uc: impl TogglePostLikeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.toggle_like = Arc::new(uc);
        self
    }

    pub fn with_list_posts(mut self, uc: impl ListPostsUseCase + Send + Sync + 'static) -> Self {
        self.post.list = Arc::new(uc);
        self
    }

    // ── comments ──────────────────────────────────────────

    pub fn with_add_comment(mut self, uc: impl AddCommentUseCase + Send + Sync + 'static) -> Self {
        self.comment.add = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.delete = Arc::new(uc);
        self
    }

    pub fn with_toggle_comment_like(
        mut self,
        uc: impl ToggleCommentLikeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.toggle_like = Arc::new(uc);
        self
    }

    pub fn with_list_comments(
        mut self,
        uc: impl ListCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.list = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            post: self.post,
            comment: self.comment,
            upload_policy: self.upload_policy,
        })
    }
}
