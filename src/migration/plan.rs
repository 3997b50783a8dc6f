//! The fixed constants of the v5.004 → v5.005 support-agent migration.
//!
//! Everything the migration hardcodes lives here as a [`RewirePlan`] value, so
//! the engine itself stays generic over node names, indices, and payloads.

/// Default location of the document to migrate.
pub const DEFAULT_INPUT_PATH: &str = "agt_suporte_gynprog_v5_004.json";
/// Default location for the migrated document.
pub const DEFAULT_OUTPUT_PATH: &str = "agt_suporte_gynprog_v5_005.json";

/// One parallel producer and the merge-node input slot it feeds.
#[derive(Debug, Clone)]
pub struct SourceBinding {
    pub name: String,
    pub input_index: u32,
}

impl SourceBinding {
    pub fn new(name: impl Into<String>, input_index: u32) -> Self {
        Self {
            name: name.into(),
            input_index,
        }
    }
}

/// The complete description of a rewiring migration: the node to insert, the
/// producers to route into it, the node it feeds, the prompt to rewrite, and
/// the new document metadata.
#[derive(Debug, Clone)]
pub struct RewirePlan {
    /// Display name of the merge node to insert.
    pub merge_node_name: String,
    /// Host-platform type tag of the merge node.
    pub merge_node_type: String,
    /// Canvas position of the merge node, display-only.
    pub merge_node_position: [i64; 2],
    /// Script body stored under `parameters.functionCode`. Opaque payload;
    /// the engine never interprets it.
    pub merge_function_code: String,
    /// Annotation placed on the merge node.
    pub merge_node_notes: String,
    /// The producers rewired into the merge node, in input-slot order.
    pub sources: Vec<SourceBinding>,
    /// The node the merge node feeds into, at input slot 0.
    pub downstream_node: String,
    /// The node whose prompt template gets rewritten.
    pub prompt_node: String,
    /// Replacement for `parameters.messages.values[1].content` on the prompt node.
    pub prompt_template: String,
    /// Replacement annotation for the prompt node.
    pub prompt_notes: String,
    /// New top-level document name.
    pub new_workflow_name: String,
}

impl Default for RewirePlan {
    fn default() -> Self {
        Self {
            merge_node_name: "Merge Contextos".to_string(),
            merge_node_type: "n8n-nodes-base.function".to_string(),
            merge_node_position: [-100, 288],
            merge_function_code: MERGE_FUNCTION_CODE.to_string(),
            merge_node_notes: "NOVO v5.005: Mescla 4 contextos paralelos antes do GPT-4"
                .to_string(),
            sources: vec![
                SourceBinding::new("PostgreSQL: Buscar Memoria", 0),
                SourceBinding::new("PostgreSQL: Mensagens Recentes", 1),
                SourceBinding::new("Pinecone: Historico (HTTP)", 2),
                SourceBinding::new("Pinecone: Knowledge Base (HTTP)", 3),
            ],
            downstream_node: "GPT-4: Gerar Resposta".to_string(),
            prompt_node: "GPT-4: Gerar Resposta".to_string(),
            prompt_template: PROMPT_TEMPLATE.to_string(),
            prompt_notes: PROMPT_NOTES.to_string(),
            new_workflow_name: "agt_suporte_gynprog_v5.005".to_string(),
        }
    }
}

/// The merge-node script body. Receives the four parallel inputs and folds
/// them into one consolidated context object per item.
const MERGE_FUNCTION_CODE: &str = r#"// ====================================================================
// MERGE CONTEXTOS v5.005 - Consolida contextos paralelos
// ====================================================================
// Este nó recebe 4 inputs paralelos e mescla em um único objeto
// para enviar ao GPT-4: Gerar Resposta
//
// Input 0: PostgreSQL: Buscar Memoria
// Input 1: PostgreSQL: Mensagens Recentes
// Input 2: Pinecone: Historico (HTTP)
// Input 3: Pinecone: Knowledge Base (HTTP)
// ====================================================================

const memoria = this.getInputData(0);
const mensagens = this.getInputData(1);
const historico = this.getInputData(2);
const knowledgeBase = this.getInputData(3);

const results = [];

// Processar cada item (geralmente apenas 1)
for (let i = 0; i < memoria.length; i++) {
  const memoriaItem = memoria[i] || { json: {} };
  const mensagensItem = mensagens[i] || { json: [] };
  const historicoItem = historico[i] || { json: {} };
  const kbItem = knowledgeBase[i] || { json: {} };

  // Extrair dados necessários
  const client_id = memoriaItem.json.client_id;
  const message_content = memoriaItem.json.message_content;
  const client_name = memoriaItem.json.client_name;
  const normalized = memoriaItem.json.normalized || {};
  const config = memoriaItem.json.config || {};
  const meta = memoriaItem.json.meta || {};

  // Consolidar contextos
  const contextosConsolidados = {
    client_id: client_id,
    client_name: client_name,
    message_content: message_content,

    // Memória do cliente
    memoria_cliente: memoriaItem.json[0] || null,

    // Mensagens recentes
    mensagens_recentes: Array.isArray(mensagensItem.json)
      ? mensagensItem.json
      : [],

    // Histórico similar (Pinecone)
    historico_similar: historicoItem.json.matches || [],

    // Base de conhecimento (Pinecone)
    knowledge_base: kbItem.json.matches || [],

    // Metadata
    normalized: normalized,
    config: config,
    meta: meta
  };

  results.push({ json: contextosConsolidados });
}

return results;
"#;

/// The rewritten user-role prompt template. Written against the consolidated
/// context object the merge node emits.
const PROMPT_TEMPLATE: &str = r#"=Mensagem do cliente: {{ $json.message_content }}

Memória do cliente:
{{ $json.memoria_cliente?.conversation_summary || 'Nenhuma memória anterior' }}

Últimas mensagens:
{{ $json.mensagens_recentes.map(m => `${m.direction}: ${m.content}`).join('\n') || 'Sem histórico recente' }}

Base de conhecimento relevante:
{{ $json.knowledge_base?.slice(0, 3).map(m => m.metadata?.text || '').join('\n\n') || 'Nenhum artigo relevante encontrado' }}

Histórico similar:
{{ $json.historico_similar?.slice(0, 2).map(m => m.metadata?.text || '').join('\n\n') || 'Sem histórico similar' }}"#;

/// The rewritten annotation for the prompt node.
const PROMPT_NOTES: &str = r#"FIXED v5.005: Prompt atualizado para usar dados consolidados do Merge Contextos
v5.004: Configurado resource=chat com mensagens e contexto completo
Prompt v2025-02-15
System: Você é um agente de suporte da Gynprog, responde em PT-BR, mantendo tom profissional e empático.
User template: mensagem normalizada, memória do cliente, últimos contatos e trechos da base de conhecimento.
Instruções: confirmar entendimento, citar dados apenas se presentes nas fontes e sinalizar limitações quando ocorrerem."#;
