use std::collections::HashMap;

lazy_static! {
    /// Error codes documented by libindy, keyed by the numeric value the
    /// library reports across its binding boundary.
    ///
    /// The table is fixed at build time; picking up a newly documented code
    /// is a data-only change.
    pub static ref INDY_ERROR_NAMES: HashMap<u32, &'static str> = {
        let mut names = HashMap::new();
        // Common errors
        names.insert(100, "CommonInvalidParam1");
        names.insert(101, "CommonInvalidParam2");
        names.insert(102, "CommonInvalidParam3");
        names.insert(103, "CommonInvalidParam4");
        names.insert(104, "CommonInvalidParam5");
        names.insert(105, "CommonInvalidParam6");
        names.insert(106, "CommonInvalidParam7");
        names.insert(107, "CommonInvalidParam8");
        names.insert(108, "CommonInvalidParam9");
        names.insert(109, "CommonInvalidParam10");
        names.insert(110, "CommonInvalidParam11");
        names.insert(111, "CommonInvalidParam12");
        names.insert(112, "CommonInvalidState");
        names.insert(113, "CommonInvalidStructure");
        names.insert(114, "CommonIOError");
        names.insert(115, "CommonInvalidParam13");
        names.insert(116, "CommonInvalidParam14");
        // Wallet errors
        names.insert(200, "WalletInvalidHandle");
        names.insert(201, "WalletUnknownTypeError");
        names.insert(202, "WalletTypeAlreadyRegisteredError");
        names.insert(203, "WalletAlreadyExistsError");
        names.insert(204, "WalletNotFoundError");
        names.insert(205, "WalletIncompatiblePoolError");
        names.insert(206, "WalletAlreadyOpenedError");
        names.insert(207, "WalletAccessFailed");
        names.insert(208, "WalletInputError");
        names.insert(209, "WalletDecodingError");
        names.insert(210, "WalletStorageError");
        names.insert(211, "WalletEncryptionError");
        names.insert(212, "WalletItemNotFound");
        names.insert(213, "WalletItemAlreadyExists");
        names.insert(214, "WalletQueryError");
        // Pool and ledger errors
        names.insert(300, "PoolLedgerNotCreatedError");
        names.insert(301, "PoolLedgerInvalidPoolHandle");
        names.insert(302, "PoolLedgerTerminated");
        names.insert(303, "LedgerNoConsensusError");
        names.insert(304, "LedgerInvalidTransaction");
        names.insert(305, "LedgerSecurityError");
        names.insert(306, "PoolLedgerConfigAlreadyExistsError");
        names.insert(307, "PoolLedgerTimeout");
        names.insert(308, "PoolIncompatibleProtocolVersion");
        names.insert(309, "LedgerNotFound");
        // Anoncreds errors
        names.insert(400, "AnoncredsRevocationRegistryFullError");
        names.insert(401, "AnoncredsInvalidUserRevocId");
        names.insert(404, "AnoncredsMasterSecretDuplicateNameError");
        names.insert(405, "AnoncredsProofRejected");
        names.insert(406, "AnoncredsCredentialRevoked");
        names.insert(407, "AnoncredsCredDefAlreadyExistsError");
        // Crypto errors
        names.insert(500, "UnknownCryptoTypeError");
        // DID errors
        names.insert(600, "DidAlreadyExistsError");
        // Payment errors
        names.insert(700, "PaymentUnknownMethodError");
        names.insert(701, "PaymentIncompatibleMethodsError");
        names.insert(702, "PaymentInsufficientFundsError");
        names.insert(703, "PaymentSourceDoesNotExistError");
        names.insert(704, "PaymentOperationNotSupportedError");
        names.insert(705, "PaymentExtraFundsError");
        names.insert(706, "TransactionNotAllowedError");
        names
    };
}

pub fn error_name(code: u32) -> Option<&'static str> {
    INDY_ERROR_NAMES.get(&code).copied()
}
