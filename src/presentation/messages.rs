//! User-facing message texts (pt-BR)

use crate::callback::data::DistanceBucket;
use crate::services::models::Race;

/// Full state name for a UF code, falling back to the code itself
pub fn uf_full_name(uf: &str) -> &str {
    match uf {
        "SP" => "São Paulo",
        "PR" => "Paraná",
        other => other,
    }
}

/// Human label for a distance bucket, e.g. "de 5km a 9km"
pub fn distance_label(bucket: DistanceBucket) -> &'static str {
    match bucket {
        DistanceBucket::All => "de todas as distâncias",
        DistanceBucket::FiveToNine => "de 5km a 9km",
        DistanceBucket::TenToTwentyOne => "de 10km a 21km",
        DistanceBucket::Marathon => "de 42km (maratona)",
    }
}

/// Shared fallback texts used at the dispatch boundary
pub mod errors {
    pub const ACTION_NOT_FOUND: &str = "❌ Ação não encontrada.";
    pub const ACTION_PROCESS_ERROR: &str = "❌ Erro ao processar ação.";
    pub const COMMAND_NOT_FOUND: &str =
        "❌ Comando não reconhecido.\nUse /ajuda para ver os comandos disponíveis.";
    pub const INTERNAL_ERROR: &str = "❌ Erro interno. Tente novamente mais tarde.";
    pub const USER_ID_MISSING: &str = "❌ ID do usuário não encontrado.";
    pub const RACE_NOT_FOUND: &str = "❌ Corrida não encontrada ou não está mais disponível.";
    pub const RACES_FETCH_ERROR: &str = "❌ Erro ao buscar corridas. Tente novamente mais tarde.";
    pub const NO_RACES_AVAILABLE: &str = "❌ Nenhuma corrida disponível no momento!";
    pub const DISTANCE_FILTER_ERROR: &str =
        "❌ Erro ao filtrar corridas por distância. Tente novamente.";
    pub const NO_LOCATION: &str = "❌ Localização não disponível para esta corrida.";
    pub const LOCATION_ERROR: &str =
        "❌ Erro ao buscar localização da corrida. Tente novamente mais tarde.";
    pub const REGISTRATION_ERROR: &str = "❌ Erro ao processar solicitação de inscrição.";
    pub const FAVORITE_ERROR: &str = "❌ Erro ao favoritar corrida. Tente novamente.";
    pub const UNFAVORITE_ERROR: &str =
        "❌ Erro ao remover corrida dos favoritos. Tente novamente.";
    pub const FAVORITES_FETCH_ERROR: &str =
        "❌ Erro ao buscar corridas favoritas. Tente novamente mais tarde.";
}

/// Race listing titles and notices
pub mod races {
    use super::{distance_label, uf_full_name};
    use crate::callback::data::DistanceBucket;

    pub const RACE_LIST_TITLE: &str = "🏃‍♂️ Lista de Corridas";
    pub const UF_FILTER_PROMPT: &str = "Escolha o estado para ver as corridas disponíveis:";

    pub fn distance_filter_title(uf: &str) -> String {
        format!(
            "📏 <strong>Filtrar por distância em {}</strong>\n\nSelecione a faixa de distância que deseja ver:",
            uf_full_name(uf)
        )
    }

    pub fn races_in_state(uf: &str, count: usize) -> String {
        format!(
            "🗺️ <strong>Corridas em {}</strong> ({})\n\nSelecione uma corrida para ver mais detalhes:",
            uf_full_name(uf),
            count
        )
    }

    pub fn filtered_races(uf: &str, bucket: DistanceBucket, count: usize) -> String {
        format!(
            "🏃‍♂️ <strong>Corridas {} em {}</strong> ({})\n\nSelecione uma corrida para ver mais detalhes:",
            distance_label(bucket),
            uf_full_name(uf),
            count
        )
    }

    pub fn no_races_found(uf: &str) -> String {
        format!("❌ Nenhuma corrida encontrada no estado de {}.", uf_full_name(uf))
    }

    pub fn no_races_found_by_distance(uf: &str, bucket: DistanceBucket) -> String {
        format!(
            "❌ Nenhuma corrida {} encontrada em {}.",
            distance_label(bucket),
            uf_full_name(uf)
        )
    }

    pub fn all_races_available(count: usize) -> String {
        format!(
            "🏃‍♂️ <strong>Corridas Disponíveis</strong>\n\nEncontradas {} corrida(s). Selecione uma para ver detalhes:",
            count
        )
    }

    pub fn races_for_distance(distance: u32, count: usize) -> String {
        format!(
            "🏃‍♂️ <strong>Corridas de {}km</strong>\n\nEncontradas {} corrida(s):",
            distance, count
        )
    }

    pub fn no_races_for_distance(distance: u32) -> String {
        format!("❌ Nenhuma corrida encontrada para a distância: {}km", distance)
    }

    pub fn favorites_list(count: usize) -> String {
        format!(
            "⭐ <strong>Suas Corridas Favoritas</strong> ({})\n\nSelecione uma corrida para ver mais detalhes:",
            count
        )
    }

    pub const NO_FAVORITES: &str = "📝 <b>Suas Corridas Favoritas</b>\n\n\
        ❌ Você ainda não tem corridas favoritas!\n\n\
        💡 Para favoritar uma corrida, use o comando /corridas e clique no botão ❤️ de uma corrida.";

    pub fn registration_prompt(title: &str) -> String {
        format!(
            "🔗 <b>{}</b>\n\nClique no botão abaixo para acessar as inscrições:",
            title
        )
    }

    pub fn race_location(title: &str, location: &str, city: Option<&str>) -> String {
        format!(
            "📍 <strong>Localização da {}</strong>\n\n🏢 <strong>Local:</strong> {}\n📍 <strong>Cidade:</strong> {}",
            title,
            location,
            city.unwrap_or("N/A")
        )
    }
}

/// Detailed HTML body for a single race
pub fn format_race_detail(race: &Race) -> String {
    let mut lines = Vec::new();

    lines.push(format!("🏃‍♂️ <b>{}</b>", race.title));
    if let Some(org) = race.organization.as_deref() {
        lines.push(format!("🏢 <b>Organização:</b> {}", org));
    }
    lines.push(format!("📅 <b>Data:</b> {}", race.date));
    if let Some(time) = race.time.as_deref() {
        lines.push(format!("🕒 <b>Largada:</b> {}", time));
    }
    lines.push(format!("📍 <b>Local:</b> {}", race.location));
    if let (Some(city), Some(state)) = (race.city.as_deref(), race.state.as_deref()) {
        lines.push(format!("🌆 <b>Cidade:</b> {} - {}", city, state));
    }
    if !race.distances.is_empty() {
        lines.push(format!("📏 <b>Distâncias:</b> {}", race.distances.join(" / ")));
    }
    lines.push(format!(
        "{} <b>Status:</b> {}",
        race.status.emoji(),
        race.status.label()
    ));

    lines.join("\n")
}

/// Numbered plain listing of races, used in text-only list responses
pub fn format_race_list(races: &[Race]) -> String {
    races
        .iter()
        .enumerate()
        .map(|(i, race)| {
            format!(
                "{}. <b>{}</b> - {} ({})",
                i + 1,
                race.title,
                race.distances.join("/"),
                race.date
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Static texts for the basic command set
pub mod basic {
    pub fn start(user_name: &str) -> String {
        format!(
            "🏃‍♂️ Olá, {}! Bem-vindo ao VELOX Bot! 🎉\n\n\
            🏆 <b>Sobre a VELOX:</b>\n\
            Somos uma plataforma dedicada a conectar corredores às melhores provas de corrida do Brasil. \
            Nossa missão é facilitar sua jornada no mundo da corrida!\n\n\
            🤖 <b>Função do Bot:</b>\n\
            • Encontrar corridas próximas a você\n\
            • Receber alertas de novas provas\n\
            • Favoritar corridas de interesse\n\
            • Acompanhar calendário de eventos\n\n\
            🌐 <b>Site oficial:</b> https://velox.run\n\n\
            ❓ <b>Precisa de ajuda?</b> Use o comando /ajuda para ver todos os comandos disponíveis!",
            user_name
        )
    }

    pub const HELP: &str = "🆘 <b>Central de Ajuda VELOX Bot</b>\n\n\
        <b>Problemas com o bot?</b> 🔧\n\
        Se você está enfrentando dificuldades, visite nosso site para mais informações:\n\
        🌐 https://velox.run\n\n\
        <b>📋 Comandos Disponíveis:</b>\n\n\
        <b>🔰 Comandos Básicos</b>\n\
        /start - Apresentação inicial do bot\n\
        /ajuda - Esta mensagem de ajuda\n\
        /contato - Informações de contato\n\
        /sobre - Sobre a VELOX e o bot\n\
        /patrocinio - Como patrocinar o projeto\n\n\
        <b>🏃‍♂️ Comandos de Corrida</b>\n\
        /corridas - Lista todas as corridas disponíveis\n\
        /favoritos - Suas corridas favoritas\n\n\
        💡 <b>Dica:</b> Clique em qualquer comando acima para executá-lo!";

    pub const CONTACT: &str = "📞 <b>Contato VELOX</b>\n\n\
        <b>📧 Email:</b>\n\
        velox.running.app@gmail.com\n\n\
        <b>🌐 Site Oficial:</b>\n\
        https://velox.run\n\n\
        <b>💬 Suporte no Telegram:</b>\n\
        @veloxsupport\n\n\
        <b>📱 Redes Sociais:</b>\n\
        Instagram: @runningvelox\n\
        Twitter: @RunningVelox\n\n\
        Estamos aqui para ajudar! 🤝";

    pub const ABOUT: &str = "🏃‍♂️ <b>Sobre a VELOX</b>\n\n\
        <b>🎯 Nossa Missão:</b>\n\
        Conectar corredores às melhores provas de corrida do Brasil, \
        facilitando o acesso a informações sobre eventos, treinos e comunidade.\n\n\
        <b>🤖 Sobre o Bot:</b>\n\
        O VELOX Bot é seu companheiro inteligente para descobrir corridas, \
        receber alertas personalizados e gerenciar seus eventos favoritos.\n\n\
        <b>🔗 Links Oficiais:</b>\n\
        🌐 Site: https://velox.run\n\
        📱 Instagram: https://instagram.com/runningvelox\n\
        🐦 Twitter: https://twitter.com/RunningVelox\n\
        💬 Suporte: @veloxsupport\n\n\
        Junte-se à nossa comunidade! 🚀";

    pub const SPONSORSHIP: &str = "🤝 <b>Programa de Patrocínio VELOX</b>\n\n\
        <b>🎯 Por que patrocinar a VELOX?</b>\n\
        • Alcance uma comunidade ativa de corredores\n\
        • Visibilidade em uma plataforma em crescimento\n\
        • Associação com estilo de vida saudável\n\
        • Único bot de corridas do Brasil\n\n\
        <b>🔗 Links Importantes:</b>\n\
        🌐 Site: https://velox.run\n\
        📱 Instagram: https://instagram.com/runningvelox\n\n\
        <b>📞 Entre em contato:</b>\n\
        📧 Email: velox.running.app@gmail.com\n\n\
        Vamos construir o futuro da corrida juntos! 🏃‍♂️💨";

    pub const MEDIA_RESTRICTION: &str = "📝 <b>Apenas mensagens de texto</b>\n\n\
        Desculpe, mas o VELOX Bot responde apenas a mensagens de texto. 🤖\n\n\
        <b>Tipos de mídia não suportados:</b>\n\
        • 🔊 Mensagens de voz\n\
        • 📷 Imagens/Fotos\n\
        • 🎥 Vídeos\n\
        • 📁 Documentos\n\
        • 🎵 Áudios\n\n\
        💡 <b>Como usar o bot:</b>\n\
        Digite comandos como /corridas ou /ajuda, ou envie mensagens de texto.\n\n\
        ❓ <b>Precisa de ajuda?</b> Use /ajuda para ver todos os comandos disponíveis!";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uf_full_names() {
        assert_eq!(uf_full_name("SP"), "São Paulo");
        assert_eq!(uf_full_name("PR"), "Paraná");
        assert_eq!(uf_full_name("RJ"), "RJ");
    }

    #[test]
    fn test_distance_labels() {
        assert_eq!(distance_label(DistanceBucket::FiveToNine), "de 5km a 9km");
        assert_eq!(distance_label(DistanceBucket::All), "de todas as distâncias");
    }

    #[test]
    fn test_start_message_includes_user_name() {
        let msg = basic::start("Ana");
        assert!(msg.contains("Olá, Ana!"));
        assert!(msg.contains("/ajuda"));
    }
}
