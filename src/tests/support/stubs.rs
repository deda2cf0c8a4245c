use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserProfile};
use crate::auth::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, LoginCommand, LoginError, LoginResult, LoginUserUseCase,
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegisteredUser,
    RequestPasswordResetCommand, RequestPasswordResetError, RequestPasswordResetUseCase,
    ResendOtpCommand, ResendOtpError, ResendOtpUseCase, ResetPasswordCommand, ResetPasswordError,
    ResetPasswordUseCase, UpdateNotificationSettingsError, UpdateNotificationSettingsUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase, VerifyOtpCommand,
    VerifyOtpError, VerifyOtpUseCase,
};
use crate::modules::comment::application::domain::entities::CommentNode;
use crate::modules::comment::application::ports::incoming::use_cases::{
    AddCommentCommand, AddCommentError, AddCommentUseCase, DeleteCommentError,
    DeleteCommentUseCase, ListCommentsError, ListCommentsUseCase, ToggleCommentLikeError,
    ToggleCommentLikeUseCase,
};
use crate::modules::post::application::domain::entities::LikeToggle;
use crate::modules::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase,
    EditPostCommand, EditPostError, EditPostUseCase, ListPostsError, ListPostsUseCase,
    TogglePostLikeError, TogglePostLikeUseCase,
};
use crate::modules::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostView,
};

//
// ──────────────────────────────────────────────────────────
// Auth
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyOtpUseCase;

#[async_trait]
impl VerifyOtpUseCase for StubVerifyOtpUseCase {
    async fn execute(&self, _command: VerifyOtpCommand) -> Result<UserProfile, VerifyOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResendOtpUseCase;

#[async_trait]
impl ResendOtpUseCase for StubResendOtpUseCase {
    async fn execute(&self, _command: ResendOtpCommand) -> Result<(), ResendOtpError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl RequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(
        &self,
        _command: RequestPasswordResetCommand,
    ) -> Result<(), RequestPasswordResetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl ResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProfileUseCase;

#[async_trait]
impl UpdateProfileUseCase for StubUpdateProfileUseCase {
    async fn execute(
        &self,
        _command: UpdateProfileCommand,
    ) -> Result<UserProfile, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateNotificationSettingsUseCase;

#[async_trait]
impl UpdateNotificationSettingsUseCase for StubUpdateNotificationSettingsUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _email_notifications: bool,
    ) -> Result<UserProfile, UpdateNotificationSettingsError> {
        unimplemented!("Not used in this test")
    }
}

//
// ──────────────────────────────────────────────────────────
// Posts
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _command: CreatePostCommand) -> Result<PostView, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEditPostUseCase;

#[async_trait]
impl EditPostUseCase for StubEditPostUseCase {
    async fn execute(&self, _command: EditPostCommand) -> Result<PostView, EditPostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _post_id: Uuid, _requester: UserId) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubTogglePostLikeUseCase;

#[async_trait]
impl TogglePostLikeUseCase for StubTogglePostLikeUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _requester: UserId,
    ) -> Result<LikeToggle, TogglePostLikeError> {
        unimplemented!("Not used in this test")
    }
}

/// Always returns an empty page.
#[derive(Default, Clone)]
pub struct EmptyListPostsUseCase;

#[async_trait]
impl ListPostsUseCase for EmptyListPostsUseCase {
    async fn execute(
        &self,
        _filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, ListPostsError> {
        Ok(PageResult {
            items: Vec::new(),
            page: page.page,
            per_page: page.per_page,
            total: 0,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Comments
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubAddCommentUseCase;

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(&self, _command: AddCommentCommand) -> Result<CommentNode, AddCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(
        &self,
        _comment_id: Uuid,
        _requester: UserId,
    ) -> Result<(), DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubToggleCommentLikeUseCase;

#[async_trait]
impl ToggleCommentLikeUseCase for StubToggleCommentLikeUseCase {
    async fn execute(
        &self,
        _comment_id: Uuid,
        _requester: UserId,
    ) -> Result<LikeToggle, ToggleCommentLikeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCommentsUseCase;

#[async_trait]
impl ListCommentsUseCase for StubListCommentsUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<Vec<CommentNode>, ListCommentsError> {
        unimplemented!("Not used in this test")
    }
}
