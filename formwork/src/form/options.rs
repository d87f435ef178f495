//! Form construction options

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::state::Form;
use crate::model::FormModel;
use crate::validation::Schema;

/// Type alias for boxed futures returned by submit handlers.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The caller-supplied submit handler.
///
/// Invoked once per successful validation with a clone of the current values,
/// while `is_submitting` is true for its whole duration. An `Err` message is
/// logged and returned from [`Form::submit`](super::Form::submit) as
/// [`SubmitError::Handler`](super::SubmitError::Handler).
pub type SubmitHandler<T> = Arc<dyn Fn(T) -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

/// Builder for a [`Form`].
///
/// # Example
///
/// ```
/// use formwork::form::FormOptions;
/// use formwork::validation::{Rule, Schema};
/// use formwork::Values;
///
/// let form = FormOptions::new(Values::new())
///     .schema(Schema::new().field("email", Rule::new().required().email()))
///     .validate_on_change(true)
///     .on_submit(|_values| async { Ok(()) })
///     .build();
/// ```
pub struct FormOptions<T> {
    pub(super) initial_values: T,
    pub(super) schema: Option<Schema>,
    pub(super) validate_on_change: bool,
    pub(super) validate_on_blur: bool,
    pub(super) on_submit: Option<SubmitHandler<T>>,
}

impl<T: FormModel> FormOptions<T> {
    /// Starts building a form seeded with the given values.
    ///
    /// Defaults: no schema, `validate_on_change` off, `validate_on_blur` on,
    /// no submit handler.
    pub fn new(initial_values: T) -> Self {
        Self {
            initial_values,
            schema: None,
            validate_on_change: false,
            validate_on_blur: true,
            on_submit: None,
        }
    }

    /// Attaches the validation schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Validate a field immediately on every value change (default: off).
    pub fn validate_on_change(mut self, enabled: bool) -> Self {
        self.validate_on_change = enabled;
        self
    }

    /// Validate a field when it is marked touched on blur (default: on).
    pub fn validate_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    /// Attaches the async submit handler.
    pub fn on_submit<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + Send + 'static,
    {
        self.on_submit = Some(Arc::new(move |values| Box::pin(handler(values))));
        self
    }

    /// Builds the form controller.
    pub fn build(self) -> Form<T> {
        Form::from_options(self)
    }
}
