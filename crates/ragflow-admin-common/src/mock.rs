//! RAGFlow Admin Mock - Seed Records
//!
//! Static records the console starts from. Nothing here is fetched; every
//! view resets to these values on reload.

use crate::types::*;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn dataset(
    id: &str,
    name: &str,
    description: &str,
    domain: &str,
    files: u32,
    size: &str,
    status: IndexStatus,
    dates: (&str, &str),
    chatbots: u32,
    tag_list: &[&str],
    chunks: (u32, u32),
) -> Dataset {
    Dataset {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        domain: domain.to_string(),
        files,
        size: size.to_string(),
        status,
        last_updated: dates.0.to_string(),
        created_at: dates.1.to_string(),
        chatbots,
        tags: tags(tag_list),
        chunks: chunks.0,
        total_chunks: chunks.1,
    }
}

/// Datasets shown on first load of the dataset list.
pub fn seed_datasets() -> Vec<Dataset> {
    vec![
        dataset(
            "ds-001",
            "Phật học cơ bản",
            "Tập dữ liệu về giáo lý Phật giáo cơ bản và thiền học",
            "Religion",
            12,
            "2.4 GB",
            IndexStatus::Indexed,
            ("2024-01-15", "2024-01-10"),
            3,
            &["phật học", "tôn giáo", "triết học", "thiền"],
            (245, 245),
        ),
        dataset(
            "ds-002",
            "Văn học Việt Nam",
            "Bộ sưu tập tác phẩm văn học Việt Nam qua các thời kỳ",
            "Literature",
            45,
            "8.2 GB",
            IndexStatus::Processing,
            ("2024-01-14", "2024-01-08"),
            1,
            &["văn học", "việt nam", "thơ ca", "tiểu thuyết"],
            (156, 380),
        ),
        dataset(
            "ds-003",
            "Lịch sử thế giới",
            "Tài liệu lịch sử các nền văn minh từ cổ đại đến hiện đại",
            "History",
            28,
            "5.1 GB",
            IndexStatus::Failed,
            ("2024-01-13", "2024-01-05"),
            0,
            &["lịch sử", "văn minh", "thế giới", "cổ đại"],
            (0, 0),
        ),
        dataset(
            "ds-004",
            "Khoa học tự nhiên",
            "Kiến thức cơ bản về vật lý, hóa học và sinh học",
            "Science",
            67,
            "12.3 GB",
            IndexStatus::Indexed,
            ("2024-01-12", "2024-01-01"),
            5,
            &["khoa học", "vật lý", "hóa học", "sinh học"],
            (892, 892),
        ),
        dataset(
            "ds-005",
            "Y học cổ truyền",
            "Tài liệu về y học cổ truyền Việt Nam và châu Á",
            "Medicine",
            23,
            "3.8 GB",
            IndexStatus::Indexed,
            ("2024-01-11", "2024-01-03"),
            2,
            &["y học", "cổ truyền", "thảo dược", "châu á"],
            (178, 178),
        ),
    ]
}

/// Tags offered as one-click suggestions in the create-dataset form.
pub const PRESET_TAGS: &[&str] = &[
    "phật học",
    "văn học",
    "lịch sử",
    "khoa học",
    "triết học",
    "tôn giáo",
    "thơ ca",
    "tiểu thuyết",
    "giáo dục",
    "y tế",
];

/// Files listed in the dataset detail view.
pub fn seed_files() -> Vec<DatasetFile> {
    vec![
        DatasetFile {
            id: "f1".to_string(),
            name: "kinh_trung_bo_tap_1.pdf".to_string(),
            size: "2.4 MB".to_string(),
            upload_date: "2024-01-15 14:30".to_string(),
            enabled: true,
            chunk_count: 45,
            parse_method: "deepdoc".to_string(),
            status: IndexStatus::Indexed,
        },
        DatasetFile {
            id: "f2".to_string(),
            name: "giao_ly_phat_giao_co_ban.docx".to_string(),
            size: "1.8 MB".to_string(),
            upload_date: "2024-01-14 09:15".to_string(),
            enabled: true,
            chunk_count: 32,
            parse_method: "general".to_string(),
            status: IndexStatus::Processing,
        },
        DatasetFile {
            id: "f3".to_string(),
            name: "thien_hoc_nhap_mon.txt".to_string(),
            size: "856 KB".to_string(),
            upload_date: "2024-01-13 16:45".to_string(),
            enabled: false,
            chunk_count: 0,
            parse_method: "general".to_string(),
            status: IndexStatus::Failed,
        },
    ]
}

/// The fixed answer to every retrieval test.
pub fn retrieval_hits() -> Vec<RetrievalHit> {
    vec![
        RetrievalHit {
            id: "1".to_string(),
            content: "Phật giáo là một tôn giáo và triết học phát nguồn từ tiểu lục địa Ấn Độ, được sáng lập bởi Đức Phật Thích-ca Mâu-ni vào khoảng thế kỷ 6-5 TCN...".to_string(),
            score: 0.95,
            source: "kinh_trung_bo_tap_1.pdf".to_string(),
            chunk_id: "chunk-12".to_string(),
        },
        RetrievalHit {
            id: "2".to_string(),
            content: "Tứ Diệu Đế là giáo lý cơ bản của Phật giáo, bao gồm: Khổ Đế, Tập Đế, Diệt Đế và Đạo Đế. Đây là nền tảng của con đường giải thoát...".to_string(),
            score: 0.87,
            source: "giao_ly_phat_giao_co_ban.docx".to_string(),
            chunk_id: "chunk-5".to_string(),
        },
        RetrievalHit {
            id: "3".to_string(),
            content: "Bát Chánh Đạo là con đường tu tập gồm 8 yếu tố: Chánh Kiến, Chánh Tư Duy, Chánh Ngữ, Chánh Nghiệp, Chánh Mạng, Chánh Tinh Tấn, Chánh Niệm, Chánh Định.".to_string(),
            score: 0.82,
            source: "kinh_trung_bo_tap_1.pdf".to_string(),
            chunk_id: "chunk-23".to_string(),
        },
    ]
}

pub fn seed_chatbots() -> Vec<Chatbot> {
    vec![
        Chatbot {
            id: "1".to_string(),
            name: "Hòa Thượng Tuệ Sỹ".to_string(),
            voice_role: "湾湾小何".to_string(),
            language_model: "Qwen3 235B Fast".to_string(),
            last_chat: "15/10/2025 14:55".to_string(),
            language: "Vietnamese".to_string(),
            status: ChatbotStatus::Active,
        },
        Chatbot {
            id: "2".to_string(),
            name: "Gia Sư Toán Học".to_string(),
            voice_role: "Friendly Teacher".to_string(),
            language_model: "GPT-4o Mini".to_string(),
            last_chat: "14/10/2025 09:30".to_string(),
            language: "Vietnamese".to_string(),
            status: ChatbotStatus::Active,
        },
    ]
}

fn user_message(id: &str, content: &str, timestamp: &str) -> Message {
    Message {
        id: id.to_string(),
        role: MessageRole::User,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        audio_available: true,
        source: None,
        response_time: None,
    }
}

fn assistant_message(id: &str, content: &str, timestamp: &str, source: &str, secs: f32) -> Message {
    Message {
        id: id.to_string(),
        role: MessageRole::Assistant,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        audio_available: false,
        source: Some(source.to_string()),
        response_time: Some(secs),
    }
}

pub fn seed_sessions() -> Vec<ChatSession> {
    vec![
        ChatSession {
            id: "1".to_string(),
            preview: "Xin hỏi về thiền định...".to_string(),
            message_count: 12,
            last_message_time: "15/10/2025 14:55".to_string(),
            messages: vec![
                user_message("m1", "Xin hỏi về thiền định trong Phật giáo?", "14:50"),
                assistant_message(
                    "m2",
                    "Thiền định (Samādhi) là một trong Tam Học trong Phật giáo, bên cạnh Giới và Tuệ. Thiền định giúp tâm trí được tập trung, thanh tịnh và phát triển trí tuệ.",
                    "14:51",
                    "Phật Học Dataset",
                    1.2,
                ),
                user_message("m3", "Có những phương pháp thiền nào?", "14:53"),
                Message {
                    id: "m4".to_string(),
                    role: MessageRole::Tool,
                    content: "Đang tìm kiếm trong Knowledge Base...".to_string(),
                    timestamp: "14:53".to_string(),
                    audio_available: false,
                    source: None,
                    response_time: None,
                },
                assistant_message(
                    "m5",
                    "Có nhiều phương pháp thiền định như: Thiền Vipassanā (Minh sát), Thiền Samatha (Chỉ), Thiền Niệm Phật, và Thiền Tọa. Mỗi phương pháp có mục đích và kỹ thuật riêng.",
                    "14:54",
                    "Phật Học Dataset, Kinh Trung Bộ",
                    0.8,
                ),
            ],
        },
        ChatSession {
            id: "2".to_string(),
            preview: "Giải thích về Tứ Diệu...".to_string(),
            message_count: 8,
            last_message_time: "14/10/2025 09:30".to_string(),
            messages: vec![
                user_message("m1", "Tứ Diệu Đế là gì?", "09:28"),
                assistant_message(
                    "m2",
                    "Tứ Diệu Đế là bốn chân lý cao quý mà Đức Phật đã giảng dạy: Khổ Đế, Tập Đế, Diệt Đế và Đạo Đế.",
                    "09:29",
                    "Phật Học Dataset",
                    1.0,
                ),
            ],
        },
    ]
}

pub fn system_services() -> Vec<SystemService> {
    [
        ("Vector Database", ServiceStatus::Online, "12ms"),
        ("LLM API", ServiceStatus::Online, "234ms"),
        ("File Processor", ServiceStatus::Processing, "1.2s"),
        ("Queue System", ServiceStatus::Online, "5ms"),
    ]
    .into_iter()
    .map(|(name, status, latency)| SystemService {
        name: name.to_string(),
        status,
        latency: latency.to_string(),
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    [
        ("Dataset created", "Admin", "2 minutes ago", ActivityKind::Create),
        ("Chatbot updated", "User", "5 minutes ago", ActivityKind::Update),
        ("File uploaded", "Admin", "10 minutes ago", ActivityKind::Upload),
        ("Agent configured", "Admin", "15 minutes ago", ActivityKind::Config),
    ]
    .into_iter()
    .map(|(action, user, time, kind)| ActivityEntry {
        action: action.to_string(),
        user: user.to_string(),
        time: time.to_string(),
        kind,
    })
    .collect()
}

pub fn summary_stats() -> Vec<SummaryStat> {
    [
        ("Total Datasets", "24", "3 processing", 12, "vs last month"),
        ("Active Chatbots", "8", "Across 5 domains", 25, "growth"),
        ("Files Uploaded", "1,234", "245 GB total", 8, "this week"),
        ("Chat Sessions", "12,543", "Today: 234", 15, "vs yesterday"),
    ]
    .into_iter()
    .map(|(title, value, description, trend, label)| SummaryStat {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        trend_percent: trend,
        trend_label: label.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let datasets = seed_datasets();
        let ids: HashSet<_> = datasets.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids.len(), datasets.len());
    }

    #[test]
    fn test_retrieval_hits_sorted_by_score() {
        let hits = retrieval_hits();
        assert_eq!(hits.len(), 3);
        assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_sessions_have_messages() {
        for session in seed_sessions() {
            assert!(!session.messages.is_empty());
        }
    }
}
