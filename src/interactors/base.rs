use std::future::Future;

pub trait Interactor {
    type Input<'a>
    where
        Self: 'a;
    type Output;
    type Err;

    fn execute<'a>(&'a self, input: Self::Input<'a>) -> impl Future<Output = Result<Self::Output, Self::Err>> + Send;
}
