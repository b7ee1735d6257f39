//! Wallet-side helpers: balance formatting, top-up pricing and the profile
//! credit dispatched once a purchase is confirmed by the wallet bridge.

use serde::{Deserialize, Serialize};

use crate::model::{GameAction, GameState, ProfilePatch};

pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;
/// 0.001 ETH buys one coin pack unit.
pub const COIN_UNIT_PRICE_WEI: u128 = WEI_PER_ETHER / 1_000;
/// 0.01 ETH buys one diamond pack unit.
pub const DIAMOND_UNIT_PRICE_WEI: u128 = WEI_PER_ETHER / 100;
pub const COINS_PER_UNIT: u64 = 1_000;
pub const DIAMONDS_PER_UNIT: u64 = 100;
/// Pack sizes offered on the top-up page.
pub const PACK_UNITS: [u64; 3] = [1, 5, 10];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TopUpKind {
    Coins,
    Diamonds,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("wallet not connected")]
    NotConnected,
    #[error("not a wallet address: {0:?}")]
    InvalidAddress(String),
    #[error("purchase needs at least one unit")]
    ZeroUnits,
    #[error("purchase of {units} units overflows")]
    Overflow { units: u64 },
}

/// Accepts plain decimal strings such as "0", "12" or "0.015".
pub fn is_decimal_balance(s: &str) -> bool {
    let mut parts = s.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    match parts.next() {
        Some(frac) => all_digits(whole) && all_digits(frac),
        None => all_digits(whole),
    }
}

/// `0x` followed by forty hex digits.
pub fn is_address(s: &str) -> bool {
    s.strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// `ConnectWallet` for an address the player linked, with its balance in wei.
pub fn link_action(address: &str, balance_wei: u128) -> Result<GameAction, WalletError> {
    let address = address.trim();
    if !is_address(address) {
        return Err(WalletError::InvalidAddress(address.to_string()));
    }
    Ok(GameAction::ConnectWallet {
        address: address.to_string(),
        balance: format_ether(balance_wei),
    })
}

/// Renders wei as ether the way wallet UIs do: "1.5", "0.0", "2.000001".
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let frac = wei % WEI_PER_ETHER;
    let frac = format!("{frac:018}");
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{frac}")
    }
}

pub fn quote(kind: TopUpKind, units: u64) -> Result<u128, WalletError> {
    if units == 0 {
        return Err(WalletError::ZeroUnits);
    }
    let unit_price = match kind {
        TopUpKind::Coins => COIN_UNIT_PRICE_WEI,
        TopUpKind::Diamonds => DIAMOND_UNIT_PRICE_WEI,
    };
    unit_price
        .checked_mul(u128::from(units))
        .ok_or(WalletError::Overflow { units })
}

/// Builds the profile credit for a confirmed top-up. The purchased amount is
/// added to the current balance.
pub fn credit_purchase(
    state: &GameState,
    kind: TopUpKind,
    units: u64,
) -> Result<GameAction, WalletError> {
    if !state.wallet.is_connected {
        return Err(WalletError::NotConnected);
    }
    if units == 0 {
        return Err(WalletError::ZeroUnits);
    }
    let overflow = WalletError::Overflow { units };
    let patch = match kind {
        TopUpKind::Coins => {
            let amount = units.checked_mul(COINS_PER_UNIT).ok_or(overflow.clone())?;
            ProfilePatch {
                coins: Some(state.player.coins.checked_add(amount).ok_or(overflow)?),
                ..Default::default()
            }
        }
        TopUpKind::Diamonds => {
            let amount = units.checked_mul(DIAMONDS_PER_UNIT).ok_or(overflow.clone())?;
            ProfilePatch {
                diamonds: Some(state.player.diamonds.checked_add(amount).ok_or(overflow)?),
                ..Default::default()
            }
        }
    };
    Ok(GameAction::UpdateProfile(patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> GameState {
        GameState::new()
            .apply(GameAction::ConnectWallet {
                address: "0x742d35Cc6634C0532925a3b8D4D9a16A1D7Fc7e1".into(),
                balance: "0.5".into(),
            })
            .unwrap()
    }

    #[test]
    fn decimal_balance_format() {
        assert!(is_decimal_balance("0"));
        assert!(is_decimal_balance("12.034"));
        assert!(!is_decimal_balance(""));
        assert!(!is_decimal_balance("1."));
        assert!(!is_decimal_balance(".5"));
        assert!(!is_decimal_balance("1.2.3"));
        assert!(!is_decimal_balance("-4"));
    }

    #[test]
    fn linking_checks_the_address() {
        let addr = "0x742d35Cc6634C0532925a3b8D4D9a16A1D7Fc7e1";
        let s = GameState::new()
            .apply(link_action(&format!(" {addr} "), WEI_PER_ETHER / 4).unwrap())
            .unwrap();
        assert!(s.wallet.is_connected);
        assert_eq!(s.wallet.address.as_deref(), Some(addr));
        assert_eq!(s.wallet.balance, "0.25");

        assert!(matches!(link_action("0x123", 0), Err(WalletError::InvalidAddress(_))));
        assert!(!is_address("742d35Cc6634C0532925a3b8D4D9a16A1D7Fc7e1"));
        assert!(!is_address("0xZZ2d35Cc6634C0532925a3b8D4D9a16A1D7Fc7e1"));
    }

    #[test]
    fn format_ether_trims_trailing_zeros() {
        assert_eq!(format_ether(0), "0.0");
        assert_eq!(format_ether(WEI_PER_ETHER), "1.0");
        assert_eq!(format_ether(WEI_PER_ETHER * 3 / 2), "1.5");
        assert_eq!(format_ether(1), "0.000000000000000001");
        assert!(is_decimal_balance(&format_ether(123_456_789)));
    }

    #[test]
    fn quotes_price_per_unit() {
        assert_eq!(quote(TopUpKind::Coins, 5), Ok(5 * COIN_UNIT_PRICE_WEI));
        assert_eq!(format_ether(quote(TopUpKind::Diamonds, 2).unwrap()), "0.02");
        assert_eq!(quote(TopUpKind::Coins, 0), Err(WalletError::ZeroUnits));
    }

    #[test]
    fn credit_adds_to_existing_balance() {
        let s = connected()
            .apply(GameAction::UpdateProfile(ProfilePatch {
                coins: Some(250),
                ..Default::default()
            }))
            .unwrap();
        let action = credit_purchase(&s, TopUpKind::Coins, 2).unwrap();
        let s = s.apply(action).unwrap();
        assert_eq!(s.player.coins, 2_250);

        let action = credit_purchase(&s, TopUpKind::Diamonds, 1).unwrap();
        assert_eq!(s.apply(action).unwrap().player.diamonds, 100);
    }

    #[test]
    fn credit_requires_connected_wallet() {
        assert_eq!(
            credit_purchase(&GameState::new(), TopUpKind::Coins, 1),
            Err(WalletError::NotConnected)
        );
        assert_eq!(credit_purchase(&connected(), TopUpKind::Coins, 0), Err(WalletError::ZeroUnits));
    }
}
