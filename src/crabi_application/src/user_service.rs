use crabi_core::{
    BlacklistCheckRequest, BlacklistError, BlacklistGateway, Password, User, UserError, UserField,
    UserRepository, UserRepositoryError,
    domain::user::{require, require_password},
};

/// Errors returned by [`UserService`].
///
/// Collaborator failures are carried as-is in the transparent variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserServiceError {
    #[error(transparent)]
    Validation(#[from] UserError),
    #[error("{0} is not configured")]
    Configuration(&'static str),
    #[error(transparent)]
    Blacklist(#[from] BlacklistError),
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    #[error("user with email {0} already exists")]
    DuplicateAccount(String),
    #[error("user not exists or invalid credentials")]
    InvalidCredentials,
    #[error("user not exists")]
    NotFound,
}

/// Registration, login and lookup of user accounts.
///
/// The service holds no state of its own besides the two collaborators it was
/// built with, so it can be shared across concurrent requests whenever they
/// can.
pub struct UserService<B, R>
where
    B: BlacklistGateway,
    R: UserRepository,
{
    blacklist_gateway: B,
    user_repository: R,
}

impl<B, R> UserService<B, R>
where
    B: BlacklistGateway,
    R: UserRepository,
{
    pub fn new(blacklist_gateway: B, user_repository: R) -> Self {
        Self {
            blacklist_gateway,
            user_repository,
        }
    }

    pub fn builder() -> UserServiceBuilder<B, R> {
        UserServiceBuilder::default()
    }

    /// Register a new user
    ///
    /// Steps, each performed at most once and in this order: field validation,
    /// blacklist check, duplicate lookup by email, save. The first failure
    /// aborts the registration.
    ///
    /// # Returns
    /// The user exactly as given, once it has been saved
    pub async fn create_user(&self, user: User) -> Result<User, UserServiceError> {
        user.validate()?;

        self.blacklist_gateway
            .check_blacklist(&BlacklistCheckRequest::from(&user))
            .await?;

        if self
            .user_repository
            .get_user_by_email(user.email())
            .await?
            .is_some()
        {
            return Err(UserServiceError::DuplicateAccount(user.email().to_owned()));
        }

        // The lookup above and this save are not atomic; a concurrent
        // registration is caught by the repository's own uniqueness check.
        match self.user_repository.save_user(user.clone()).await {
            Ok(()) => Ok(user),
            Err(UserRepositoryError::UserAlreadyExists) => {
                Err(UserServiceError::DuplicateAccount(user.email().to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Authenticate a user by email and password
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &Password) -> Result<User, UserServiceError> {
        require(UserField::Email, email)?;
        require_password(password)?;

        self.user_repository
            .get_user_by_email_and_password(email, password)
            .await?
            .ok_or(UserServiceError::InvalidCredentials)
    }

    /// Look up a user by email
    pub async fn get_user(&self, email: &str) -> Result<User, UserServiceError> {
        require(UserField::Email, email)?;

        self.user_repository
            .get_user_by_email(email)
            .await?
            .ok_or(UserServiceError::NotFound)
    }
}

/// Builds a [`UserService`], refusing to produce one with a collaborator missing.
pub struct UserServiceBuilder<B, R> {
    blacklist_gateway: Option<B>,
    user_repository: Option<R>,
}

impl<B, R> Default for UserServiceBuilder<B, R> {
    fn default() -> Self {
        Self {
            blacklist_gateway: None,
            user_repository: None,
        }
    }
}

impl<B, R> UserServiceBuilder<B, R>
where
    B: BlacklistGateway,
    R: UserRepository,
{
    pub fn blacklist_gateway(mut self, blacklist_gateway: B) -> Self {
        self.blacklist_gateway = Some(blacklist_gateway);
        self
    }

    pub fn user_repository(mut self, user_repository: R) -> Self {
        self.user_repository = Some(user_repository);
        self
    }

    pub fn build(self) -> Result<UserService<B, R>, UserServiceError> {
        let blacklist_gateway = self
            .blacklist_gateway
            .ok_or(UserServiceError::Configuration("pld service"))?;
        let user_repository = self
            .user_repository
            .ok_or(UserServiceError::Configuration("user repository"))?;

        Ok(UserService::new(blacklist_gateway, user_repository))
    }
}
