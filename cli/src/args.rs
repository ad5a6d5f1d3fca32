use alloy_primitives::{Address, B256};
use clap::{Parser, Subcommand, ValueEnum};
use zkwallet_interfaces::data::{fee::TxFeeType, receipt::ActionType};

#[derive(Parser)]
#[clap(name = "zkwallet")]
#[clap(about = "Layer-2 wallet CLI tool")]
pub struct Args {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Account {
        #[clap(long)]
        address: Address,
    },
    GasPrice,
    Fee {
        #[clap(long)]
        address: Address,
        #[clap(long)]
        token: String,
        #[clap(long, value_enum, default_value_t = FeeTypeArg::Transfer)]
        tx_type: FeeTypeArg,
    },
    TxStatus {
        #[clap(long)]
        hash: String,
        #[clap(long, value_enum)]
        wait: Option<WaitArg>,
    },
    SignerAddress {
        #[clap(long)]
        private_key: B256,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FeeTypeArg {
    Transfer,
    Withdraw,
    FastWithdraw,
}

impl From<FeeTypeArg> for TxFeeType {
    fn from(arg: FeeTypeArg) -> Self {
        match arg {
            FeeTypeArg::Transfer => TxFeeType::Transfer,
            FeeTypeArg::Withdraw => TxFeeType::Withdraw,
            FeeTypeArg::FastWithdraw => TxFeeType::FastWithdraw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WaitArg {
    Commit,
    Verify,
}

impl From<WaitArg> for ActionType {
    fn from(arg: WaitArg) -> Self {
        match arg {
            WaitArg::Commit => ActionType::Commit,
            WaitArg::Verify => ActionType::Verify,
        }
    }
}
