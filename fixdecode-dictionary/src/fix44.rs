/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Embedded FIX 4.4 dictionary.
//!
//! Covers the standard header and trailer, the session-level messages, and a
//! handful of common application fields, including fields deprecated since
//! FIX 4.3 and 4.4.

use crate::schema::{Dictionary, FieldDef, FieldType};

/// Administrative / session-level tags.
pub const SYSTEM_FIELDS: &[u32] = &[
    7, 8, 9, 10, 16, 34, 35, 36, 43, 45, 49, 50, 52, 56, 57, 89, 90, 91, 93, 97, 98, 108, 112,
    115, 122, 123, 128, 141, 369, 371, 372, 373, 383, 789,
];

const MSG_TYPES: &[(&str, &str)] = &[
    ("0", "Heartbeat"),
    ("1", "TestRequest"),
    ("2", "ResendRequest"),
    ("3", "Reject"),
    ("4", "SequenceReset"),
    ("5", "Logout"),
    ("6", "IndicationOfInterest"),
    ("7", "Advertisement"),
    ("8", "ExecutionReport"),
    ("9", "OrderCancelReject"),
    ("A", "Logon"),
    ("B", "News"),
    ("C", "Email"),
    ("D", "NewOrderSingle"),
    ("E", "NewOrderList"),
    ("F", "OrderCancelRequest"),
    ("G", "OrderCancelReplaceRequest"),
    ("H", "OrderStatusRequest"),
    ("J", "AllocationInstruction"),
    ("K", "ListCancelRequest"),
    ("L", "ListExecute"),
    ("M", "ListStatusRequest"),
    ("N", "ListStatus"),
    ("P", "AllocationInstructionAck"),
    ("Q", "DontKnowTrade"),
    ("R", "QuoteRequest"),
    ("S", "Quote"),
    ("T", "SettlementInstructions"),
    ("V", "MarketDataRequest"),
    ("W", "MarketDataSnapshotFullRefresh"),
    ("X", "MarketDataIncrementalRefresh"),
    ("Y", "MarketDataRequestReject"),
    ("Z", "QuoteCancel"),
    ("a", "QuoteStatusRequest"),
    ("b", "MassQuoteAcknowledgement"),
    ("c", "SecurityDefinitionRequest"),
    ("d", "SecurityDefinition"),
    ("e", "SecurityStatusRequest"),
    ("f", "SecurityStatus"),
    ("g", "TradingSessionStatusRequest"),
    ("h", "TradingSessionStatus"),
    ("i", "MassQuote"),
    ("j", "BusinessMessageReject"),
    ("k", "BidRequest"),
    ("l", "BidResponse"),
    ("m", "ListStrikePrice"),
    ("n", "XMLnonFIX"),
    ("o", "RegistrationInstructions"),
    ("p", "RegistrationInstructionsResponse"),
    ("q", "OrderMassCancelRequest"),
    ("r", "OrderMassCancelReport"),
    ("s", "NewOrderCross"),
    ("t", "CrossOrderCancelReplaceRequest"),
    ("u", "CrossOrderCancelRequest"),
    ("v", "SecurityTypeRequest"),
    ("w", "SecurityTypes"),
    ("x", "SecurityListRequest"),
    ("y", "SecurityList"),
    ("z", "DerivativeSecurityListRequest"),
    ("BE", "UserRequest"),
    ("BF", "UserResponse"),
];

const YES_NO: &[(&str, &str)] = &[("Y", "Yes"), ("N", "No")];

const ENCRYPT_METHODS: &[(&str, &str)] = &[
    ("0", "None"),
    ("1", "PKCS"),
    ("2", "DES"),
    ("3", "PKCSDES"),
    ("4", "PGPDES"),
    ("5", "PGPDESMD5"),
    ("6", "PEMDESMD5"),
];

const SESSION_REJECT_REASONS: &[(&str, &str)] = &[
    ("0", "InvalidTagNumber"),
    ("1", "RequiredTagMissing"),
    ("2", "TagNotDefinedForThisMessageType"),
    ("3", "UndefinedTag"),
    ("4", "TagSpecifiedWithoutAValue"),
    ("5", "ValueIsIncorrect"),
    ("6", "IncorrectDataFormatForValue"),
    ("7", "DecryptionProblem"),
    ("8", "SignatureProblem"),
    ("9", "CompIDProblem"),
    ("10", "SendingTimeAccuracyProblem"),
    ("11", "InvalidMsgType"),
    ("12", "XMLValidationError"),
    ("13", "TagAppearsMoreThanOnce"),
    ("14", "TagSpecifiedOutOfRequiredOrder"),
    ("15", "RepeatingGroupFieldsOutOfOrder"),
    ("16", "IncorrectNumInGroupCountForRepeatingGroup"),
    ("17", "NonDataValueIncludesFieldDelimiter"),
    ("99", "Other"),
];

const SIDES: &[(&str, &str)] = &[
    ("1", "Buy"),
    ("2", "Sell"),
    ("3", "BuyMinus"),
    ("4", "SellPlus"),
    ("5", "SellShort"),
    ("6", "SellShortExempt"),
    ("7", "Undisclosed"),
    ("8", "Cross"),
    ("9", "CrossShort"),
];

const ORD_TYPES: &[(&str, &str)] = &[
    ("1", "Market"),
    ("2", "Limit"),
    ("3", "Stop"),
    ("4", "StopLimit"),
    ("6", "WithOrWithout"),
    ("7", "LimitOrBetter"),
    ("8", "LimitWithOrWithout"),
    ("9", "OnBasis"),
    ("D", "PreviouslyQuoted"),
    ("E", "PreviouslyIndicated"),
    ("G", "ForexSwap"),
    ("I", "Funari"),
    ("J", "MarketIfTouched"),
    ("K", "MarketWithLeftOverAsLimit"),
    ("L", "PreviousFundValuationPoint"),
    ("M", "NextFundValuationPoint"),
    ("P", "Pegged"),
];

const RULE_80A: &[(&str, &str)] = &[
    ("A", "AgencySingleOrder"),
    ("P", "Principal"),
    ("W", "AgentForOtherMember"),
];

fn field(tag: u32, name: &str, field_type: FieldType) -> FieldDef {
    FieldDef::new(tag, name, field_type)
}

fn header(tag: u32, name: &str, field_type: FieldType) -> FieldDef {
    field(tag, name, field_type).as_header()
}

fn required_header(tag: u32, name: &str, field_type: FieldType) -> FieldDef {
    header(tag, name, field_type).as_required()
}

impl Dictionary {
    /// Returns the embedded FIX 4.4 dictionary.
    #[must_use]
    pub fn fix44() -> Self {
        let fields = [
            // Standard header
            required_header(8, "BeginString", FieldType::String)
                .with_description("Identifies beginning of new message and protocol version"),
            required_header(9, "BodyLength", FieldType::Length)
                .with_description("Message length, in bytes, forward to the CheckSum field"),
            required_header(35, "MsgType", FieldType::String)
                .with_value_labels(MSG_TYPES.iter().copied())
                .with_description("Defines message type"),
            required_header(49, "SenderCompID", FieldType::String),
            required_header(56, "TargetCompID", FieldType::String),
            required_header(34, "MsgSeqNum", FieldType::SeqNum),
            required_header(52, "SendingTime", FieldType::UtcTimestamp),
            header(115, "OnBehalfOfCompID", FieldType::String),
            header(128, "DeliverToCompID", FieldType::String),
            header(90, "SecureDataLen", FieldType::Length),
            header(91, "SecureData", FieldType::Data),
            header(50, "SenderSubID", FieldType::String),
            header(142, "SenderLocationID", FieldType::String),
            header(57, "TargetSubID", FieldType::String),
            header(143, "TargetLocationID", FieldType::String),
            header(116, "OnBehalfOfSubID", FieldType::String),
            header(144, "OnBehalfOfLocationID", FieldType::String),
            header(129, "DeliverToSubID", FieldType::String),
            header(145, "DeliverToLocationID", FieldType::String),
            header(43, "PossDupFlag", FieldType::Boolean).with_value_labels(YES_NO.iter().copied()),
            header(97, "PossResend", FieldType::Boolean).with_value_labels(YES_NO.iter().copied()),
            header(122, "OrigSendingTime", FieldType::UtcTimestamp),
            header(212, "XmlDataLen", FieldType::Length),
            header(213, "XmlData", FieldType::XmlData),
            header(347, "MessageEncoding", FieldType::String),
            header(369, "LastMsgSeqNumProcessed", FieldType::SeqNum),
            header(627, "NoHops", FieldType::NumInGroup),
            header(628, "HopCompID", FieldType::String),
            header(629, "HopSendingTime", FieldType::UtcTimestamp),
            header(630, "HopRefID", FieldType::SeqNum),
            // Standard trailer
            field(93, "SignatureLength", FieldType::Length),
            field(89, "Signature", FieldType::Data),
            field(10, "CheckSum", FieldType::String)
                .as_required()
                .with_description("Three byte checksum, always the last field in the message"),
            // Session-level messages
            field(7, "BeginSeqNo", FieldType::SeqNum),
            field(16, "EndSeqNo", FieldType::SeqNum),
            field(36, "NewSeqNo", FieldType::SeqNum),
            field(123, "GapFillFlag", FieldType::Boolean).with_value_labels(YES_NO.iter().copied()),
            field(98, "EncryptMethod", FieldType::Int).with_value_labels(ENCRYPT_METHODS.iter().copied()),
            field(108, "HeartBtInt", FieldType::Int),
            field(112, "TestReqID", FieldType::String),
            field(141, "ResetSeqNumFlag", FieldType::Boolean).with_value_labels(YES_NO.iter().copied()),
            field(45, "RefSeqNum", FieldType::SeqNum),
            field(371, "RefTagID", FieldType::Int),
            field(372, "RefMsgType", FieldType::String),
            field(373, "SessionRejectReason", FieldType::Int)
                .with_value_labels(SESSION_REJECT_REASONS.iter().copied()),
            field(58, "Text", FieldType::String),
            field(354, "EncodedTextLen", FieldType::Length),
            field(355, "EncodedText", FieldType::Data),
            field(383, "MaxMessageSize", FieldType::Length),
            field(789, "NextExpectedMsgSeqNum", FieldType::SeqNum),
            field(553, "Username", FieldType::String),
            field(554, "Password", FieldType::String),
            field(464, "TestMessageIndicator", FieldType::Boolean).with_value_labels(YES_NO.iter().copied()),
            field(95, "RawDataLength", FieldType::Length),
            field(96, "RawData", FieldType::Data),
            // Common application fields
            field(1, "Account", FieldType::String),
            field(11, "ClOrdID", FieldType::String),
            field(37, "OrderID", FieldType::String),
            field(17, "ExecID", FieldType::String),
            field(38, "OrderQty", FieldType::Qty),
            field(40, "OrdType", FieldType::Char).with_value_labels(ORD_TYPES.iter().copied()),
            field(44, "Price", FieldType::Price),
            field(54, "Side", FieldType::Char).with_value_labels(SIDES.iter().copied()),
            field(55, "Symbol", FieldType::String),
            field(60, "TransactTime", FieldType::UtcTimestamp),
            field(15, "Currency", FieldType::Currency),
            field(207, "SecurityExchange", FieldType::Exchange),
            // Deprecated application fields
            field(47, "Rule80A", FieldType::Char)
                .with_value_labels(RULE_80A.iter().copied())
                .with_deprecated_since("4.3"),
            field(204, "CustomerOrFirm", FieldType::Int).with_deprecated_since("4.3"),
            field(440, "ClearingAccount", FieldType::String).with_deprecated_since("4.4"),
            field(21, "HandlInst", FieldType::Char).with_deprecated_since("5.0"),
        ];

        let mut dictionary = Self::new("FIX.4.4").with_system_fields(SYSTEM_FIELDS.iter().copied());
        for field in fields {
            dictionary.add_field(field);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixdecode_core::FieldTag;

    #[test]
    fn test_fix44_header_fields() {
        let dict = Dictionary::fix44();
        assert_eq!(dict.begin_string, "FIX.4.4");

        for tag in [8, 9, 35, 49, 56, 34, 52] {
            let field = dict.get_field(FieldTag::new(tag)).unwrap();
            assert!(field.required, "tag {tag} should be required");
            assert!(field.header, "tag {tag} should be a header field");
        }
        assert!(!dict.get_field(FieldTag::new(10)).unwrap().header);
    }

    #[test]
    fn test_fix44_types() {
        let dict = Dictionary::fix44();
        let type_of = |name: &str| dict.get_field_by_name(name).map(|f| f.field_type.clone());

        assert_eq!(type_of("BodyLength"), Some(FieldType::Length));
        assert_eq!(type_of("MsgSeqNum"), Some(FieldType::SeqNum));
        assert_eq!(type_of("SendingTime"), Some(FieldType::UtcTimestamp));
        assert_eq!(type_of("BeginSeqNo"), Some(FieldType::SeqNum));
        assert_eq!(type_of("CheckSum"), Some(FieldType::String));
    }

    #[test]
    fn test_fix44_descriptions() {
        let dict = Dictionary::fix44();
        let description = |tag: u32| {
            dict.get_field(FieldTag::new(tag))
                .and_then(|f| f.description.as_deref())
        };

        assert_eq!(description(35), Some("Defines message type"));
        assert!(description(10).is_some_and(|d| d.contains("checksum")));
        assert_eq!(description(49), None);

        let json = dict.to_json().unwrap();
        assert!(json.contains(r#""description": "Defines message type""#));
    }

    #[test]
    fn test_fix44_msg_type_labels() {
        let dict = Dictionary::fix44();
        let msg_type = dict.get_field(FieldTag::new(35)).unwrap();
        assert_eq!(msg_type.label_for("2"), Some("ResendRequest"));
        assert_eq!(msg_type.label_for("A"), Some("Logon"));
        assert_eq!(msg_type.label_for("BE"), Some("UserRequest"));
        assert_eq!(msg_type.label_for("??"), None);
    }

    #[test]
    fn test_fix44_system_fields() {
        let dict = Dictionary::fix44();
        for tag in SYSTEM_FIELDS {
            assert!(
                dict.get_field(FieldTag::new(*tag)).is_some(),
                "system field {tag} should be defined"
            );
        }
        assert!(dict.contains_system_field(FieldTag::new(35)));
        assert!(!dict.contains_system_field(FieldTag::new(55)));
    }

    #[test]
    fn test_fix44_deprecations() {
        let dict = Dictionary::fix44();
        let since = |tag: u32| {
            dict.get_field(FieldTag::new(tag))
                .and_then(|f| f.deprecated_since.clone())
        };
        assert_eq!(since(47).as_deref(), Some("4.3"));
        assert_eq!(since(440).as_deref(), Some("4.4"));
        assert_eq!(since(21).as_deref(), Some("5.0"));
        assert_eq!(since(35), None);
    }
}
