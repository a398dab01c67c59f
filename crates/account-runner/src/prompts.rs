//! Fixed prompt catalog
//!
//! The catalog doubles as the per-run iteration cap: one run submits at
//! most this many messages. Prompts are chosen uniformly at random with
//! replacement, so repeats within a run are expected.

/// Built-in prompt catalog, used unless the config supplies its own.
pub const DEFAULT_PROMPTS: &[&str] = &[
    "What is Bitcoin?",
    "How does blockchain work?",
    "What is the difference between a coin and a token?",
    "Why is decentralization important in crypto?",
    "What is Ethereum used for?",
    "How do smart contracts work?",
    "What is the purpose of mining in crypto?",
    "What is a crypto wallet?",
    "How can I keep my crypto safe?",
    "What is DeFi?",
    "Why do cryptocurrencies have high volatility?",
    "What is the difference between proof of work and proof of stake?",
    "What are NFTs?",
    "How do I buy and sell cryptocurrencies?",
    "What is a public and private key in crypto?",
    "How does a crypto exchange work?",
    "What is staking in crypto?",
    "What are the risks of investing in cryptocurrencies?",
    "How can I earn passive income with crypto?",
    "What is the future of cryptocurrency?",
    "What is a stablecoin?",
    "How do crypto transactions work?",
    "What is a blockchain explorer?",
    "What is a crypto airdrop?",
    "How do I choose a good crypto project to invest in?",
    "What are the benefits of using cryptocurrency?",
    "What is a DAO in crypto?",
    "What is gas fee in Ethereum?",
    "What is the Lightning Network?",
    "How does a hardware wallet work?",
    "What are the top cryptocurrencies by market cap?",
    "What is a memecoin?",
    "What is the difference between a centralized and decentralized exchange?",
    "How does crypto lending work?",
    "What are some common crypto scams?",
    "What is a crypto faucet?",
    "How does yield farming work?",
    "What is the Metaverse in crypto?",
    "What is an ICO (Initial Coin Offering)?",
    "What is a crypto rug pull?",
    "How does token burning work?",
    "What is a hash function in blockchain?",
    "What is the role of nodes in a blockchain network?",
    "What is a 51% attack in crypto?",
    "How do governance tokens work?",
    "What is an oracle in blockchain?",
    "What is the difference between layer 1 and layer 2 solutions?",
    "What is a crypto bridge?",
    "How do I convert crypto to fiat?",
    "What is the impact of regulations on crypto?",
];

/// Owned copy of the built-in catalog, for configs that do not override it.
pub fn default_prompts() -> Vec<String> {
    DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect()
}
