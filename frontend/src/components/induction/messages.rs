use common::model::config::ClientConfig;
use common::model::site::SiteData;
use common::signature::StrokePoint;

pub enum Msg {
    ConfigLoaded(ClientConfig),
    SiteDataLoaded(SiteData),
    InductionContentLoaded(Option<String>),
    UpdateFullName(String),
    UpdatePhoneNumber(String),
    UpdateWhiteCard(String),
    AddCardRow,
    RemoveCardRow(u32),
    UpdateCardName(u32, String),
    UpdateCardNumber(u32, String),
    DownloadContact,
    OpenModal,
    InitializeSignature,
    CloseModal,
    ClearSignature,
    PenDown(StrokePoint),
    PenMove(StrokePoint),
    PenUp,
    Submit,
    SubmissionSucceeded,
    SubmissionFailed(String),
}
