use birdpinger::config;
use birdpinger::err::FatalErr;
use birdpinger::ping::Notifier;
use birdpinger::stream::HttpConnector;
use birdpinger::Dispatcher;

#[tokio::main]
async fn main() -> Result<(), FatalErr> {
    config::merge_dotenv()?;
    pretty_env_logger::try_init()?;
    let (twitter_cfg, spigot_cfg) = config::from_env(dotenv::vars().collect())?;

    let connector = HttpConnector::new(
        twitter_cfg.stream_url.0.clone(),
        twitter_cfg.username.0.clone(),
        twitter_cfg.password.expose().to_string(),
    )?;
    let client = reqwest::Client::builder().build()?;
    let notifier = Notifier::new(client.clone(), spigot_cfg.ping_url()?, spigot_cfg.secret.expose());

    Dispatcher::new(client, spigot_cfg.following_url()?, connector, notifier)
        .run()
        .await
}
