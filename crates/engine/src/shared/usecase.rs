use futures::future::join_all;
use prazo_infra::PrazoContext;
use std::fmt::Debug;
use tracing::error;

/// Subscriber is a side effect to a `UseCase`
///
/// It is going to act upon the response of the execution
/// of the `UseCase` if the execution was a success.
#[async_trait::async_trait]
pub trait Subscriber<U: UseCase>: Send + Sync {
    async fn notify(&self, e: &U::Response, ctx: &PrazoContext);
}

#[async_trait::async_trait]
pub trait UseCase: Debug + Send {
    type Response: Send + Sync;
    type Errors: Send;

    const NAME: &'static str;

    async fn execute(&mut self, ctx: &PrazoContext) -> Result<Self::Response, Self::Errors>;

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>>
    where
        Self: Sized,
    {
        Default::default()
    }
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = U::NAME))]
pub async fn execute<U>(mut usecase: U, ctx: &PrazoContext) -> Result<U::Response, U::Errors>
where
    U: UseCase,
    U::Errors: Debug,
{
    let res = usecase.execute(ctx).await;

    match &res {
        Ok(res) => {
            let subscribers = U::subscribers();
            let mut subscriber_promises = Vec::with_capacity(subscribers.len());
            for subscriber in &subscribers {
                subscriber_promises.push(subscriber.notify(res, ctx));
            }
            join_all(subscriber_promises).await;
        }
        Err(e) => {
            error!("Use case error: {:?}", e);
        }
    }

    res
}
