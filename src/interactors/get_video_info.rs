use crate::{
    errors::ExtractionError,
    format_selector,
    interactors::Interactor,
    models::InfoResponse,
    services::VideoInfoProvider,
    utils::parse_url,
};

use std::sync::Arc;
use tracing::{event, instrument, Level};

pub struct GetVideoInfo<P> {
    provider: Arc<P>,
}

impl<P> GetVideoInfo<P> {
    pub const fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

pub struct GetVideoInfoInput<'a> {
    pub url: &'a str,
}

impl<'a> GetVideoInfoInput<'a> {
    pub const fn new(url: &'a str) -> Self {
        Self { url }
    }
}

impl<P: VideoInfoProvider> Interactor for GetVideoInfo<P> {
    type Input<'a>
        = GetVideoInfoInput<'a>
    where
        Self: 'a;
    type Output = InfoResponse;
    type Err = ExtractionError;

    #[instrument(target = "get_info", skip_all, fields(url = input.url))]
    async fn execute<'a>(&'a self, input: Self::Input<'a>) -> Result<Self::Output, Self::Err> {
        let url = parse_url(input.url)?;

        let info = self.provider.fetch_info(&url).await?;
        let formats = format_selector::select(&info.formats);

        event!(Level::DEBUG, formats = formats.len(), "Got video info");

        Ok(InfoResponse::new(info, formats))
    }
}
