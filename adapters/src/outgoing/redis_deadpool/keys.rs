use domain::wallet::WalletId;

#[derive(Clone)]
pub struct RedisKeyBuilder {
    balance_namespace: String,
}

impl RedisKeyBuilder {
    pub fn new(environment: &str) -> Self {
        let root_namespace = "wallet";
        Self {
            balance_namespace: format!("{}:{}:balance:v1", root_namespace, environment),
        }
    }

    pub fn balance_key(&self, wallet_id: WalletId) -> String {
        format!("{}:{}", self.balance_namespace, wallet_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn balance_key_is_namespaced_by_environment() {
        let keys = RedisKeyBuilder::new("production");
        let wallet_id = WalletId::new(42).unwrap();

        assert_eq!(keys.balance_key(wallet_id), "wallet:production:balance:v1:42");
    }

    #[test]
    fn environments_do_not_share_keys() {
        let wallet_id = WalletId::new(7).unwrap();
        assert_ne!(
            RedisKeyBuilder::new("development").balance_key(wallet_id),
            RedisKeyBuilder::new("test").balance_key(wallet_id)
        );
    }
}
