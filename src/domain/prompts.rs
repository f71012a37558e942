//! Prompt templates for brief generation and rehearsal
//!
//! Each pipeline stage gets its prompt from one builder here. Builders are
//! pure functions of the form inputs, the document digest, optional live
//! search notes, and the accumulated output of earlier stages.

use crate::domain::models::MeetingRequest;

/// Everything a stage prompt may interpolate
#[derive(Debug, Clone, Copy)]
pub struct StageInputs<'a> {
    pub request: &'a MeetingRequest,
    /// Concatenated supporting-document digest
    pub digest: &'a str,
    /// Snippets from the live web search, empty when disabled
    pub search_notes: &'a str,
    /// Concatenated output of all earlier stages
    pub prior: &'a str,
}

impl<'a> StageInputs<'a> {
    fn directives(&self) -> String {
        let mut directives = Vec::new();
        if self.request.include_live_updates {
            directives.push(
                "- Incorporate the most recent news, market movements, and growth signals.",
            );
        }
        if self.request.include_regulatory {
            directives.push(
                "- Highlight regulatory, compliance, and localization considerations that could influence the meeting.",
            );
        }
        if self.request.meeting_notes.is_some() {
            directives.push(
                "- Bridge insights with the historical notes provided to emphasize continuity and momentum.",
            );
        }
        if directives.is_empty() {
            directives.push("- Focus on actionable intelligence.");
        }
        directives.join("\n")
    }

    fn shared_context(&self) -> String {
        format!(
            "Supporting documents summary:\n{}\n\nHistorical notes supplied by the team:\n{}",
            self.digest,
            self.request
                .meeting_notes
                .as_deref()
                .unwrap_or("No additional notes were provided.")
        )
    }

    fn search_section(&self) -> String {
        if self.search_notes.is_empty() {
            String::new()
        } else {
            format!("\nLive web intelligence:\n{}\n", self.search_notes)
        }
    }

    fn prior_section(&self) -> String {
        if self.prior.is_empty() {
            String::new()
        } else {
            format!("\nPreparation produced so far:\n{}\n", self.prior)
        }
    }
}

/// Prompt builders for each pipeline stage and the auxiliary flows
pub struct PromptTemplates;

impl PromptTemplates {
    pub fn context_analysis(inputs: &StageInputs) -> String {
        let request = inputs.request;
        format!(
            r#"Analyze the context for the meeting with {company}, considering:
1. The meeting objective: {objective}
2. The attendees: {attendees}
3. The meeting duration: {duration} minutes
4. Specific focus areas or concerns: {focus}

Directives to prioritize:
{directives}

Reference the following shared materials:
{shared}
{search}
Research {company} thoroughly, including recent developments, key products or
services, and major competitors and differentiators.

Provide a comprehensive summary of your findings, highlighting the most
relevant information for the meeting context. Format output using markdown
with clear headings and subheadings."#,
            company = request.company,
            objective = request.objective,
            attendees = request.attendees_text(),
            duration = request.duration_minutes,
            focus = request.focus_areas_text(),
            directives = inputs.directives(),
            shared = inputs.shared_context(),
            search = inputs.search_section(),
        )
    }

    pub fn industry_analysis(inputs: &StageInputs) -> String {
        let request = inputs.request;
        format!(
            r#"Based on the context analysis for {company} and the meeting objective: {objective}, provide an in-depth industry analysis:
1. Identify key trends and developments in the industry
2. Analyze the competitive landscape and challenger approaches
3. Highlight potential opportunities and threats for the meeting sponsor
4. Provide insights on market positioning compared to peers

Supporting materials to infuse:
{digest}
{search}{prior}
Ensure the analysis is relevant to the meeting objective and attendees' roles.
Format output using markdown with appropriate headings and subheadings."#,
            company = request.company,
            objective = request.objective,
            digest = inputs.digest,
            search = inputs.search_section(),
            prior = inputs.prior_section(),
        )
    }

    pub fn meeting_strategy(inputs: &StageInputs) -> String {
        let request = inputs.request;
        format!(
            r#"Using the context analysis and industry insights, develop a tailored meeting strategy and detailed agenda for the {duration}-minute meeting with {company}. Include:
1. A time-boxed agenda with clear objectives for each section
2. Key talking points for each agenda item, connected to business value and risk mitigation
3. Suggested speakers or leaders for each section, mapped to the attendees:
{attendees}
4. Potential discussion topics and questions to drive the conversation
5. Strategies to address the specific focus areas and concerns: {focus}
6. Personalization cues leveraging attendee personas: {personas}
{prior}
Ensure the strategy and agenda align with the meeting objective: {objective}.
Format output using markdown with appropriate headings and subheadings."#,
            duration = request.duration_minutes,
            company = request.company,
            attendees = request.attendees_text(),
            focus = request.focus_areas_text(),
            personas = request
                .attendee_personas
                .as_deref()
                .unwrap_or("No persona insights provided."),
            prior = inputs.prior_section(),
            objective = request.objective,
        )
    }

    pub fn executive_brief(inputs: &StageInputs) -> String {
        let request = inputs.request;
        format!(
            r#"Synthesize all gathered information into a comprehensive executive brief for the meeting with {company}. Create:
1. A one-page executive summary: objective, key attendees and roles, critical background, top 3-5 strategic goals, and the meeting structure
2. An in-depth list of key talking points, each supported by data, examples, and connection to the company's current situation
3. Anticipated questions from attendees with thoughtful, data-driven responses
4. Strategic recommendations and next steps with timelines and mitigation for likely roadblocks

Ensure the brief is comprehensive yet concise and precisely aligned with the meeting objective: {objective}. Integrate the shared materials below when relevant:
{shared}
{prior}"#,
            company = request.company,
            objective = request.objective,
            shared = inputs.shared_context(),
            prior = inputs.prior_section(),
        )
    }

    pub fn rehearsal_simulation(inputs: &StageInputs) -> String {
        let request = inputs.request;
        format!(
            r#"Facilitate a rehearsal simulation for the meeting with {company}. Deliver:
1. A scripted dry-run agenda with prompts for each speaker
2. Persona-driven objections or tough questions informed by the attendees ({attendees}) and the focus areas: {focus}
3. Suggested high-confidence responses grounded in the research generated so far
4. Coaching tips on tone and supporting assets
5. Scenario branches for unexpected pivots. Prioritize the following rehearsal focus:
   {rehearsal}
{prior}
Reference the broader preparation outputs so the rehearsal reflects the planned meeting arc."#,
            company = request.company,
            attendees = request.attendees_text(),
            focus = request.focus_areas_text(),
            rehearsal = request
                .rehearsal_focus
                .as_deref()
                .unwrap_or("No additional simulation requests provided."),
            prior = inputs.prior_section(),
        )
    }

    pub fn post_meeting_activation(inputs: &StageInputs) -> String {
        let request = inputs.request;
        format!(
            r#"Convert the meeting plan into actionable follow-ups. Produce:
1. A prioritized action item tracker with owners, due dates, and success metrics
2. A draft follow-up communication tailored to the preferred channel(s): {channels}
3. Recommendations for logging outcomes in CRM or project tools
4. A checklist for meeting-day capture (notes, decisions, risks, commitments)
{prior}
Integrate the shared preparation context and emphasize how to maintain momentum immediately after the meeting concludes."#,
            channels = request
                .followup_channels
                .as_deref()
                .unwrap_or("Not specified"),
            prior = inputs.prior_section(),
        )
    }

    /// Practice mode: ask the model for the next stakeholder objection
    pub fn practice_objection(request: &MeetingRequest, session_log: &str) -> String {
        format!(
            r#"Generate the next realistic stakeholder objection for a rehearsal.
Company: {company}
Objective: {objective}
Attendees: {attendees}
Focus areas: {focus}
Recent practice log:
{log}

Output 1-2 sentences with a sharp, persona-driven objection."#,
            company = request.company,
            objective = request.objective,
            attendees = request.attendees_text(),
            focus = request.focus_areas_text(),
            log = session_log,
        )
    }

    /// Practice mode: score the user's reply to the last objection
    pub fn practice_score(request: &MeetingRequest, session_log: &str, response: &str) -> String {
        format!(
            r#"Evaluate the user's response to the last objection.
Provide:
- Score (1-10) on clarity, evidence, and relevance
- 3 coaching tips to improve
- A refined sample answer (3-5 sentences)

Context: {company}, objective: {objective}, focus areas: {focus}
Practice log:
{log}
User response:
{response}"#,
            company = request.company,
            objective = request.objective,
            focus = request.focus_areas_text(),
            log = session_log,
            response = response,
        )
    }

    /// Summarize a pasted transcript into decisions, actions, and risks
    pub fn transcript_summary(request: &MeetingRequest, transcript: &str) -> String {
        format!(
            r#"You are assisting during or after a meeting with {company}.
Based on the transcript below, produce:
- A concise executive summary (5-8 bullets)
- Decisions made (if any)
- Action items table: Item, Owner (if detectable), Due (suggested), Success metric
- Risks and open questions

Meeting objective: {objective}
Attendees: {attendees}
Focus areas: {focus}

Transcript:
{transcript}"#,
            company = request.company,
            objective = request.objective,
            attendees = request.attendees_text(),
            focus = request.focus_areas_text(),
            transcript = transcript,
        )
    }
}
