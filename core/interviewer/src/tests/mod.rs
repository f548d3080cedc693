mod interview_app_tests;
mod interview_flow_tests;
