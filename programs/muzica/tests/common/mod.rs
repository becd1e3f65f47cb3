#![allow(dead_code)]

use anchor_lang::{system_program, AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::associated_token::{self, get_associated_token_address};
use anchor_spl::token::{self, spl_token};
use muzica::util::pda::{custody_account_address, find_stem_mint_address, find_track_address};
use muzica::Track;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction, InstructionError},
    native_token::LAMPORTS_PER_SOL,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_instruction,
    transaction::{Transaction, TransactionError},
};

/// Anchor's entrypoint ties the account slice and the account infos to one lifetime,
/// which the native processor signature does not provide.
fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    muzica::entry(program_id, accounts, data)
}

pub async fn start() -> ProgramTestContext {
    let program_test = ProgramTest::new("muzica", muzica::ID, processor!(process_instruction));
    program_test.start_with_context().await
}

/// Sign `instructions` with the payer plus `signers` against a fresh blockhash, so
/// repeating an identical instruction still yields a distinct transaction.
pub async fn build_transaction(
    context: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Transaction {
    let blockhash = context
        .get_new_latest_blockhash()
        .await
        .expect("latest blockhash");
    let mut all_signers: Vec<&Keypair> = vec![&context.payer];
    all_signers.extend_from_slice(signers);
    Transaction::new_signed_with_payer(
        instructions,
        Some(&context.payer.pubkey()),
        &all_signers,
        blockhash,
    )
}

pub async fn process(
    context: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    let tx = build_transaction(context, instructions, signers).await;
    context.banks_client.process_transaction(tx).await
}

/// Custom program error code carried by a failed transaction, if any.
pub fn custom_error_code(err: BanksClientError) -> Option<u32> {
    match err.unwrap() {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
        _ => None,
    }
}

pub async fn funded_keypair(context: &mut ProgramTestContext) -> Keypair {
    let keypair = Keypair::new();
    let ix = system_instruction::transfer(
        &context.payer.pubkey(),
        &keypair.pubkey(),
        10 * LAMPORTS_PER_SOL,
    );
    process(context, &[ix], &[]).await.expect("fund keypair");
    keypair
}

/// Create a 6-decimal mint whose mint authority is the test payer.
pub async fn create_mint(context: &mut ProgramTestContext) -> Pubkey {
    let mint = Keypair::new();
    let rent = context.banks_client.get_rent().await.expect("rent");
    let payer = context.payer.pubkey();
    let ixs = [
        system_instruction::create_account(
            &payer,
            &mint.pubkey(),
            rent.minimum_balance(spl_token::state::Mint::LEN),
            spl_token::state::Mint::LEN as u64,
            &token::ID,
        ),
        spl_token::instruction::initialize_mint(&token::ID, &mint.pubkey(), &payer, None, 6)
            .expect("initialize_mint ix"),
    ];
    process(context, &ixs, &[&mint]).await.expect("create mint");
    mint.pubkey()
}

pub async fn create_token_account(
    context: &mut ProgramTestContext,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Pubkey {
    let ix = spl_associated_token_account::instruction::create_associated_token_account(
        &context.payer.pubkey(),
        owner,
        mint,
        &token::ID,
    );
    process(context, &[ix], &[]).await.expect("create token account");
    get_associated_token_address(owner, mint)
}

pub async fn mint_tokens(
    context: &mut ProgramTestContext,
    mint: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) {
    let payer = context.payer.pubkey();
    let ix = spl_token::instruction::mint_to(&token::ID, mint, destination, &payer, &[], amount)
        .expect("mint_to ix");
    process(context, &[ix], &[]).await.expect("mint tokens");
}

pub async fn token_balance(context: &mut ProgramTestContext, token_account: &Pubkey) -> u64 {
    let account = context
        .banks_client
        .get_account(*token_account)
        .await
        .expect("get_account")
        .expect("token account exists");
    spl_token::state::Account::unpack(&account.data)
        .expect("token account data")
        .amount
}

pub async fn fetch_mint(context: &mut ProgramTestContext, mint: &Pubkey) -> spl_token::state::Mint {
    let account = context
        .banks_client
        .get_account(*mint)
        .await
        .expect("get_account")
        .expect("mint exists");
    spl_token::state::Mint::unpack(&account.data).expect("mint data")
}

pub async fn fetch_track(context: &mut ProgramTestContext, track: &Pubkey) -> Track {
    let account = context
        .banks_client
        .get_account(*track)
        .await
        .expect("get_account")
        .expect("track exists");
    Track::try_deserialize(&mut account.data.as_slice()).expect("track data")
}

// ========== INSTRUCTION BUILDERS ==========

pub fn initialize_track_ix(
    authority: &Pubkey,
    track_id: u64,
    title: &str,
    cid: &str,
    contributors: Vec<Pubkey>,
    shares_bps: Vec<u16>,
) -> Instruction {
    let (track, _) = find_track_address(authority, track_id);
    Instruction {
        program_id: muzica::ID,
        accounts: muzica::accounts::InitializeTrack {
            authority: *authority,
            track,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: muzica::instruction::InitializeTrack {
            track_id,
            title: title.to_string(),
            cid: cid.to_string(),
            master_hash: [9u8; 32],
            contributors,
            shares_bps,
        }
        .data(),
    }
}

pub fn update_shares_ix(
    authority: &Pubkey,
    track_id: u64,
    new_shares_bps: Vec<u16>,
    contributors: Vec<Pubkey>,
) -> Instruction {
    let (track, _) = find_track_address(authority, track_id);
    Instruction {
        program_id: muzica::ID,
        accounts: muzica::accounts::UpdateShares {
            authority: *authority,
            track,
        }
        .to_account_metas(None),
        data: muzica::instruction::UpdateShares {
            track_id,
            new_shares_bps,
            contributors,
        }
        .data(),
    }
}

pub fn register_stem_mint_ix(authority: &Pubkey, track_id: u64, stem_mint: Pubkey) -> Instruction {
    let (track, _) = find_track_address(authority, track_id);
    Instruction {
        program_id: muzica::ID,
        accounts: muzica::accounts::RegisterStemMint {
            authority: *authority,
            track,
        }
        .to_account_metas(None),
        data: muzica::instruction::RegisterStemMint {
            track_id,
            stem_mint,
        }
        .data(),
    }
}

pub fn create_escrow_account_ix(
    payer: &Pubkey,
    authority: &Pubkey,
    track_id: u64,
    mint: &Pubkey,
) -> Instruction {
    let (track, _) = find_track_address(authority, track_id);
    Instruction {
        program_id: muzica::ID,
        accounts: muzica::accounts::CreateEscrowAccount {
            payer: *payer,
            track,
            escrow_token_account: custody_account_address(&track, mint),
            mint: *mint,
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: muzica::instruction::CreateEscrowAccount {
            track_id,
            authority: *authority,
        }
        .data(),
    }
}

pub fn escrow_deposit_ix(
    depositor: &Pubkey,
    depositor_token_account: &Pubkey,
    escrow_token_account: &Pubkey,
    authority: &Pubkey,
    track_id: u64,
    amount: u64,
) -> Instruction {
    let (track, _) = find_track_address(authority, track_id);
    Instruction {
        program_id: muzica::ID,
        accounts: muzica::accounts::EscrowDeposit {
            depositor: *depositor,
            track,
            escrow_token_account: *escrow_token_account,
            depositor_token_account: *depositor_token_account,
            token_program: token::ID,
        }
        .to_account_metas(None),
        data: muzica::instruction::EscrowDeposit {
            amount,
            track_id,
            authority: *authority,
        }
        .data(),
    }
}

pub fn escrow_distribute_ix(
    authority: &Pubkey,
    track_id: u64,
    escrow_token_account: &Pubkey,
    recipients: &[Pubkey],
    amount: u64,
) -> Instruction {
    let (track, _) = find_track_address(authority, track_id);
    let mut accounts = muzica::accounts::EscrowDistribute {
        authority: *authority,
        track,
        escrow_token_account: *escrow_token_account,
        token_program: token::ID,
    }
    .to_account_metas(None);
    accounts.extend(
        recipients
            .iter()
            .map(|recipient| AccountMeta::new(*recipient, false)),
    );
    Instruction {
        program_id: muzica::ID,
        accounts,
        data: muzica::instruction::EscrowDistribute { amount, track_id }.data(),
    }
}

pub fn mint_stem_nft_ix(
    contributor: &Pubkey,
    track_authority: &Pubkey,
    track_id: u64,
    nft_index: u64,
) -> Instruction {
    let (track, _) = find_track_address(track_authority, track_id);
    let (stem_mint, _) = find_stem_mint_address(&track, nft_index);
    Instruction {
        program_id: muzica::ID,
        accounts: muzica::accounts::MintStemNft {
            contributor: *contributor,
            track_authority: *track_authority,
            track,
            stem_mint,
            recipient_token_account: get_associated_token_address(contributor, &stem_mint),
            token_program: token::ID,
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: muzica::instruction::MintStemNft {
            track_id,
            nft_index,
        }
        .data(),
    }
}
