use clap::Parser;
use colored::Colorize as _;
use zkwallet_cli::{
    args::{Args, Commands},
    cli::{
        error::CliError,
        get::{account, fee, gas_price, signer_address},
        status::tx_status,
    },
};
use zkwallet_client_sdk::{client::error::ClientError, utils::logger::init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();

    if let Err(e) = main_process(args.command).await {
        if let CliError::ClientError(ClientError::TransactionFailed(failed)) = &e {
            println!("{}", failed.message.red());
            std::process::exit(2);
        }
        println!("{}", e.to_string().red());
        std::process::exit(1);
    }
    Ok(())
}

async fn main_process(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Account { address } => {
            account(address).await?;
        }
        Commands::GasPrice => {
            gas_price().await?;
        }
        Commands::Fee {
            address,
            token,
            tx_type,
        } => {
            fee(address, &token, tx_type.into()).await?;
        }
        Commands::TxStatus { hash, wait } => {
            tx_status(&hash, wait.map(Into::into)).await?;
        }
        Commands::SignerAddress { private_key } => {
            signer_address(private_key)?;
        }
    }
    Ok(())
}
