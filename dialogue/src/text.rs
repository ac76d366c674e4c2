//! Assistant copy (pt-BR).

pub const WELCOME: &str = "Olá! Sou a Lótus, sua assistente virtual. Como posso ajudar você hoje?";
pub const GREETING: &str =
    "Olá! Como posso ajudar você hoje? Escolha uma opção ou digite sua pergunta.";
pub const FALLBACK: &str =
    "Desculpe, não entendi. Você gostaria de iniciar um dos atendimentos abaixo?";

pub const THEFT_START: &str = "Lamento muito pelo ocorrido. Para iniciar o processo de bloqueio e denúncia, preciso de algumas informações. Por favor, digite seu e-mail.";
pub const COMPLAINT_START: &str = "Para registrar sua denúncia, por favor, digite seu e-mail.";
pub const PROTECTION_START: &str =
    "Para acessar a central de proteção e verificar suas opções, por favor, digite seu e-mail.";
pub const SUPPORT_START: &str =
    "Para direcionar você ao canal de atendimento correto, por favor, digite seu e-mail.";
pub const CANCELLATION_START: &str =
    "Entendo que você queira cancelar sua conta. Para prosseguir, por favor, digite seu e-mail.";

pub const INVALID_EMAIL: &str = "Por favor, digite um e-mail válido.";
pub const ASK_CONFIRMATION: &str =
    "Obrigado. Agora, por favor, digite sua senha para confirmar sua identidade.";
pub const CONFIRMATION_REQUIRED: &str = "Por favor, digite sua senha.";
pub const ASK_DESCRIPTION: &str =
    "Senha confirmada. Por favor, descreva detalhadamente o ocorrido.";
pub const DESCRIPTION_REQUIRED: &str =
    "Por favor, descreva o ocorrido para que eu possa registrar.";
pub const DESCRIPTION_TOO_SHORT: &str =
    "Por favor, forneça mais detalhes sobre o ocorrido ou sua solicitação.";

pub const RESTART_MENU: &str = "Certo, como posso ajudar você agora?";
pub const FAREWELL: &str = "Agradeço o contato. Se precisar de algo mais, estarei aqui!";
pub const CHOICE_REPROMPT: &str =
    "Você gostaria de iniciar um novo atendimento ou encerrar o chat?";

pub const MORE_HELP_LABEL: &str = "Sim, preciso de mais ajuda";
pub const NO_THANKS_LABEL: &str = "Não, obrigado";

/// Completion message; the code is wrapped in `**` so surfaces can render it bold.
pub fn completion(protocol: &str) -> String {
    format!(
        "Certo. Seu atendimento foi registrado com o protocolo **{}**. Nossa equipe analisará seu caso e entrará em contato em breve. O tempo estimado de resposta é de 24 a 48 horas úteis. Precisa de mais alguma coisa?",
        protocol
    )
}
